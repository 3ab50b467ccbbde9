//! Workspace materialization pipeline.
//!
//! One generation run walks the stage machine Created -> Populated ->
//! Substituted -> Finalized -> TornDown: copy the workspace template into a
//! scratch directory, rewrite the identity tokens, write the composed
//! stylesheet and font fragments, drop in logo assets and deploy files,
//! zip the result into memory, and remove the scratch directory. The
//! scratch directory is a `TempDir`, so failure from any stage still ends
//! in teardown when the guard drops; nothing from a failed run is ever
//! delivered.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use uuid::Uuid;
use walkdir::WalkDir;

use crate::models::GenerateConfig;
use crate::theme::{compose_theme_stylesheet, FontSelection};
use crate::workspace::archive::build_archive;
use crate::workspace::template;

/// Media type of the generated archive.
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

/// Stages of one generation run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    /// Scratch directory created.
    Created,
    /// Template tree copied into the scratch directory.
    Populated,
    /// Identity, theme, fonts, assets, and deploy files applied.
    Substituted,
    /// Archive built in memory.
    Finalized,
    /// Scratch directory removed.
    TornDown,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "Created",
            Self::Populated => "Populated",
            Self::Substituted => "Substituted",
            Self::Finalized => "Finalized",
            Self::TornDown => "TornDown",
        };
        write!(f, "{label}")
    }
}

/// The product of a successful run: archive bytes plus delivery metadata.
#[derive(Debug, Clone)]
pub struct GeneratedArchive {
    /// Complete zip archive.
    pub bytes: Vec<u8>,
    /// Download filename, `{slug}-workspace.zip`.
    pub filename: String,
    /// Always [`ARCHIVE_CONTENT_TYPE`].
    pub content_type: &'static str,
}

/// Runs the full pipeline for a validated config.
///
/// Progress is written to `log` as timestamped `[INFO]` / `[WARN]` lines.
/// The caller resolves `template_root` first (see
/// [`template::resolve_template_root`]); this function still verifies the
/// workspace template before creating any scratch state.
///
/// # Errors
///
/// Returns an error when the workspace template is missing or any
/// copy/substitute/archive step fails. The scratch directory is removed in
/// every case.
pub fn generate_workspace(
    config: &GenerateConfig,
    template_root: &Path,
    log: &mut dyn Write,
) -> Result<GeneratedArchive> {
    let (archive, _) = run_pipeline(config, template_root, log, false)?;
    Ok(archive)
}

/// Like [`generate_workspace`] but skips teardown and returns the scratch
/// path, for inspecting what a run produced.
pub fn generate_workspace_keeping_scratch(
    config: &GenerateConfig,
    template_root: &Path,
    log: &mut dyn Write,
) -> Result<(GeneratedArchive, PathBuf)> {
    let (archive, scratch) = run_pipeline(config, template_root, log, true)?;
    scratch.context("Scratch path missing despite keep request")
        .map(|path| (archive, path))
}

fn run_pipeline(
    config: &GenerateConfig,
    template_root: &Path,
    log: &mut dyn Write,
    keep_scratch: bool,
) -> Result<(GeneratedArchive, Option<PathBuf>)> {
    let generation_id = Uuid::new_v4();
    let _ = writeln!(
        log,
        "[INFO] Generation {generation_id} started at {}",
        chrono::Utc::now().to_rfc3339()
    );
    let _ = writeln!(
        log,
        "[INFO] Client: {} ({})",
        config.client_name, config.project_slug
    );

    // Fail fast: verify the template before creating any scratch state.
    let workspace_template = template::workspace_template_dir(template_root);
    if !workspace_template.is_dir() {
        bail!(
            "Workspace template missing at '{}'",
            workspace_template.display()
        );
    }

    let scratch = tempfile::Builder::new()
        .prefix(&format!("{}-workspace-", config.project_slug))
        .tempdir()
        .context("Failed to create scratch directory")?;
    let _ = writeln!(
        log,
        "[INFO] Stage {}: scratch workspace at {}",
        GenerationStage::Created,
        scratch.path().display()
    );

    let copied = copy_tree(&workspace_template, scratch.path())?;
    let _ = writeln!(
        log,
        "[INFO] Stage {}: {copied} files copied from template",
        GenerationStage::Populated
    );

    substitute(config, template_root, scratch.path(), log)?;
    let _ = writeln!(log, "[INFO] Stage {}", GenerationStage::Substituted);

    let root_name = config.workspace_root_name();
    let bytes = build_archive(scratch.path(), &root_name)?;
    let filename = config.archive_filename();
    let _ = writeln!(
        log,
        "[INFO] Stage {}: archive {filename} ({} bytes)",
        GenerationStage::Finalized,
        bytes.len()
    );

    let scratch_path = if keep_scratch {
        let path = scratch.keep();
        let _ = writeln!(
            log,
            "[INFO] Scratch workspace kept at {} (teardown skipped)",
            path.display()
        );
        Some(path)
    } else {
        teardown(scratch, log);
        None
    };

    let _ = writeln!(
        log,
        "[INFO] Generation {generation_id} completed at {}",
        chrono::Utc::now().to_rfc3339()
    );

    Ok((
        GeneratedArchive {
            bytes,
            filename,
            content_type: ARCHIVE_CONTENT_TYPE,
        },
        scratch_path,
    ))
}

/// Explicit teardown on the happy path. A deletion error here is a
/// warning, not a generation failure; the archive is already built.
fn teardown(scratch: TempDir, log: &mut dyn Write) {
    if let Err(e) = scratch.close() {
        let _ = writeln!(
            log,
            "[WARN] Failed to remove scratch workspace: {e}"
        );
    } else {
        let _ = writeln!(
            log,
            "[INFO] Stage {}: scratch workspace removed",
            GenerationStage::TornDown
        );
    }
}

/// Recursive template copy, directories created, files copied
/// byte-for-byte. Returns the file count.
fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.context("Failed to walk template tree")?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .context("Walked entry outside the template tree")?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create '{}'", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy '{}'", relative.display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// All substitution steps, in the order the pipeline guarantees:
/// identity rewrite, stylesheet, font splice, logo assets, deploy files.
fn substitute(
    config: &GenerateConfig,
    template_root: &Path,
    scratch: &Path,
    log: &mut dyn Write,
) -> Result<()> {
    let rewritten = rewrite_identity(scratch, &config.project_slug, &config.client_name)?;
    let _ = writeln!(log, "[INFO] Identity rewrite: {rewritten} files updated");

    let stylesheet = compose_theme_stylesheet(&config.theme_config());
    let stylesheet_path = scratch.join(template::STYLESHEET_FILE);
    if let Some(parent) = stylesheet_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    fs::write(&stylesheet_path, stylesheet)
        .with_context(|| format!("Failed to write '{}'", template::STYLESHEET_FILE))?;
    let _ = writeln!(
        log,
        "[INFO] Theme stylesheet written to {}",
        template::STYLESHEET_FILE
    );

    splice_fonts(config, scratch, log)?;
    write_logos(config, scratch, log)?;
    let deployed = copy_deploy_files(config, template_root, scratch, log)?;
    let _ = writeln!(log, "[INFO] Deploy files written: {deployed}");

    Ok(())
}

/// Applies the ordered identity substitutions to every text file under
/// the scratch tree. Returns how many files changed.
fn rewrite_identity(scratch: &Path, slug: &str, client_name: &str) -> Result<usize> {
    let mut rewritten = 0;
    for entry in WalkDir::new(scratch).min_depth(1) {
        let entry = entry.context("Failed to walk scratch tree")?;
        if !entry.file_type().is_file() || !template::is_text_file(entry.path()) {
            continue;
        }
        let content = fs::read_to_string(entry.path())
            .with_context(|| format!("Failed to read '{}'", entry.path().display()))?;
        let replaced = template::apply_identity(&content, slug, client_name);
        if replaced != content {
            fs::write(entry.path(), replaced)
                .with_context(|| format!("Failed to rewrite '{}'", entry.path().display()))?;
            rewritten += 1;
        }
    }
    Ok(rewritten)
}

/// Splices the font fragments into the entry file and patches the favicon
/// metadata when a favicon was supplied. Missing markers are skipped.
fn splice_fonts(config: &GenerateConfig, scratch: &Path, log: &mut dyn Write) -> Result<()> {
    let entry_path = scratch.join(template::ENTRY_FILE);
    if !entry_path.is_file() {
        let _ = writeln!(
            log,
            "[WARN] Entry file {} missing, font splice skipped",
            template::ENTRY_FILE
        );
        return Ok(());
    }

    let selection = FontSelection::new(&config.heading_font, &config.body_font);
    let mut content = fs::read_to_string(&entry_path)
        .with_context(|| format!("Failed to read '{}'", template::ENTRY_FILE))?;

    let splices = [
        (template::FONT_IMPORTS_MARKER, selection.import_fragment()),
        (template::FONT_DECLARATIONS_MARKER, selection.declaration_fragment()),
        (template::FONT_VARIABLES_MARKER, selection.variable_reference_fragment()),
    ];
    for (marker, fragment) in splices {
        if content.contains(marker) {
            content = content.replace(marker, &fragment);
        } else {
            let _ = writeln!(
                log,
                "[WARN] Marker {marker} missing in {}, skipped",
                template::ENTRY_FILE
            );
        }
    }

    if config.logos.favicon.is_some() {
        if content.contains(template::FAVICON_ICO_METADATA) {
            content = content.replace(
                template::FAVICON_ICO_METADATA,
                template::FAVICON_SVG_METADATA,
            );
            let _ = writeln!(log, "[INFO] Favicon metadata patched to /favicon.svg");
        } else {
            let _ = writeln!(
                log,
                "[WARN] Favicon metadata line missing in {}, skipped",
                template::ENTRY_FILE
            );
        }
    }

    fs::write(&entry_path, content)
        .with_context(|| format!("Failed to write '{}'", template::ENTRY_FILE))?;
    let _ = writeln!(
        log,
        "[INFO] Font fragments spliced into {}",
        template::ENTRY_FILE
    );
    Ok(())
}

/// Writes supplied logo SVGs to their fixed paths. Absent slots keep the
/// template's placeholder assets.
fn write_logos(config: &GenerateConfig, scratch: &Path, log: &mut dyn Write) -> Result<()> {
    let slots = [
        (&config.logos.icon, template::LOGO_ICON_PATH),
        (&config.logos.light, template::LOGO_LIGHT_PATH),
        (&config.logos.dark, template::LOGO_DARK_PATH),
        (&config.logos.favicon, template::FAVICON_PATH),
    ];

    let mut written = 0;
    for (content, relative) in slots {
        if let Some(svg) = content {
            let target = scratch.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::write(&target, svg).with_context(|| format!("Failed to write '{relative}'"))?;
            written += 1;
        }
    }

    let _ = writeln!(log, "[INFO] Logo assets written: {written}");
    Ok(())
}

/// Copies the fixed deploy file list with placeholder substitution. A
/// missing source file is a warning, not a failure.
fn copy_deploy_files(
    config: &GenerateConfig,
    template_root: &Path,
    scratch: &Path,
    log: &mut dyn Write,
) -> Result<usize> {
    let deploy_dir = template::deploy_template_dir(template_root);
    let mut written = 0;

    for name in template::DEPLOY_FILES {
        let source = deploy_dir.join(name);
        if !source.is_file() {
            let _ = writeln!(log, "[WARN] Deploy template {name} missing, skipped");
            continue;
        }
        let content = fs::read_to_string(&source)
            .with_context(|| format!("Failed to read deploy template '{name}'"))?;
        let substituted =
            template::apply_deploy_tokens(&content, &config.client_name, &config.project_slug);
        fs::write(scratch.join(name), substituted)
            .with_context(|| format!("Failed to write deploy file '{name}'"))?;
        written += 1;
    }

    Ok(written)
}

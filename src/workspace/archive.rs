//! Zip archive construction for generated workspaces.
//!
//! The finished scratch tree is zipped into memory; nothing is written
//! next to the scratch directory. Every entry is prefixed with a single
//! root folder so extraction stays contained, and entry names are
//! validated before they reach the writer.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, Cursor};
use std::path::{Component, Path};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Walks `source_dir` and writes a deflate-compressed zip into memory.
///
/// Entry names are `{root_entry_name}/{relative path}` with forward
/// slashes, so extraction yields one top-level folder. Directory entries
/// are emitted too, keeping empty directories intact. Entries are added in
/// sorted order; identical trees produce identical archives.
///
/// # Errors
///
/// Any unreadable file or invalid entry name aborts the archive; partial
/// output is never returned.
pub fn build_archive(source_dir: &Path, root_entry_name: &str) -> Result<Vec<u8>> {
    if !source_dir.is_dir() {
        bail!("Workspace tree '{}' does not exist", source_dir.display());
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for entry in WalkDir::new(source_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.context("Failed to walk workspace tree")?;
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .context("Walked entry outside the workspace tree")?;
        let name = entry_name(root_entry_name, relative)?;

        if entry.file_type().is_dir() {
            zip.add_directory(&name, options)
                .with_context(|| format!("Failed to add directory entry '{name}'"))?;
        } else {
            zip.start_file(&name, options)
                .with_context(|| format!("Failed to start archive entry '{name}'"))?;
            let mut file = File::open(entry.path())
                .with_context(|| format!("Failed to open '{}'", entry.path().display()))?;
            io::copy(&mut file, &mut zip)
                .with_context(|| format!("Failed to write archive entry '{name}'"))?;
        }
    }

    let cursor = zip.finish().context("Failed to finalize archive")?;
    Ok(cursor.into_inner())
}

/// Builds a forward-slash entry name under the root folder, rejecting
/// anything that could escape it on extraction.
fn entry_name(root: &str, relative: &Path) -> Result<String> {
    let mut parts: Vec<&str> = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part
                    .to_str()
                    .with_context(|| format!("Non-UTF-8 path '{}'", relative.display()))?;
                parts.push(part);
            }
            _ => bail!("Invalid path in workspace tree: '{}'", relative.display()),
        }
    }

    let name = format!("{root}/{}", parts.join("/"));
    if name.contains("..") || name.starts_with('/') || name.starts_with('\\') {
        bail!("Invalid entry name in archive: '{name}'");
    }
    Ok(name)
}

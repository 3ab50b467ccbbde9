//! Template tree contract and identity substitution.
//!
//! The workspace template ships with a neutral "Launchpad" identity; this
//! module knows where its moving parts live (stylesheet, entry file, logo
//! slots, deploy files) and how to rewrite the identity tokens for a
//! client. It also resolves the template root: explicit override first,
//! then app config, then a bounded upward search.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory name searched for during template-root discovery.
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Workspace template subdirectory under the template root.
pub const WORKSPACE_DIR: &str = "workspace";

/// Deploy template subdirectory under the template root.
pub const DEPLOY_DIR: &str = "deploy";

/// Stylesheet path inside the workspace, overwritten by the composer.
pub const STYLESHEET_FILE: &str = "app/globals.css";

/// Entry file inside the workspace, target of the font splice.
pub const ENTRY_FILE: &str = "app/layout.tsx";

/// Marker line replaced with the font import fragment.
pub const FONT_IMPORTS_MARKER: &str = "// __FONT_IMPORTS__";

/// Marker line replaced with the font declaration fragment.
pub const FONT_DECLARATIONS_MARKER: &str = "// __FONT_DECLARATIONS__";

/// Marker inside the `className` string replaced with variable references.
pub const FONT_VARIABLES_MARKER: &str = "__FONT_VARIABLES__";

/// Entry-file metadata as shipped in the template.
pub const FAVICON_ICO_METADATA: &str = "icons: { icon: \"/favicon.ico\" }";

/// Entry-file metadata after a favicon SVG is provided.
pub const FAVICON_SVG_METADATA: &str = "icons: { icon: \"/favicon.svg\" }";

/// Fixed logo asset paths inside the workspace.
pub const LOGO_ICON_PATH: &str = "public/logo-icon.svg";
pub const LOGO_LIGHT_PATH: &str = "public/logo-light.svg";
pub const LOGO_DARK_PATH: &str = "public/logo-dark.svg";
pub const FAVICON_PATH: &str = "public/favicon.svg";

/// Deploy files copied from the deploy template root, in order.
pub const DEPLOY_FILES: [&str; 4] = ["Dockerfile", "docker-compose.yml", ".dockerignore", "DEPLOY.md"];

/// Extensions treated as text during the identity rewrite. Anything else
/// is copied untouched.
pub const TEXT_EXTENSIONS: [&str; 16] = [
    "ts", "tsx", "js", "jsx", "mjs", "cjs", "json", "css", "md", "mdx", "html", "svg", "yml",
    "yaml", "toml", "txt",
];

/// How many ancestor levels the upward template search may climb.
const TEMPLATE_SEARCH_DEPTH: usize = 6;

// Identity tokens baked into the workspace template.
const SCOPED_TOKEN: &str = "@launchpad";
const BARE_TOKEN: &str = "launchpad";
const DISPLAY_TOKEN: &str = "Launchpad";

// Placeholder tokens used by the deploy templates.
const CLIENT_NAME_TOKEN: &str = "{{CLIENT_NAME}}";
const PROJECT_SLUG_TOKEN: &str = "{{PROJECT_SLUG}}";

/// Ordered identity replacement pairs for one client.
///
/// The scoped token comes before the bare token: a bare-token pass first
/// would eat the tail of every scoped occurrence. The display name runs
/// last so replacement text from the earlier passes is never rescanned
/// with a different token.
#[must_use]
pub fn identity_substitutions(slug: &str, client_name: &str) -> [(String, String); 3] {
    [
        (SCOPED_TOKEN.to_string(), format!("@{slug}")),
        (BARE_TOKEN.to_string(), slug.to_string()),
        (DISPLAY_TOKEN.to_string(), client_name.to_string()),
    ]
}

/// Applies the identity substitutions to one file's content, in order.
#[must_use]
pub fn apply_identity(content: &str, slug: &str, client_name: &str) -> String {
    let mut output = content.to_string();
    for (token, replacement) in identity_substitutions(slug, client_name) {
        output = output.replace(&token, &replacement);
    }
    output
}

/// Applies the deploy placeholder tokens to one file's content.
#[must_use]
pub fn apply_deploy_tokens(content: &str, client_name: &str, slug: &str) -> String {
    content
        .replace(CLIENT_NAME_TOKEN, client_name)
        .replace(PROJECT_SLUG_TOKEN, slug)
}

/// Whether a file takes part in the identity rewrite, by extension.
#[must_use]
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            TEXT_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Workspace template directory under a template root.
#[must_use]
pub fn workspace_template_dir(template_root: &Path) -> PathBuf {
    template_root.join(WORKSPACE_DIR)
}

/// Deploy template directory under a template root.
#[must_use]
pub fn deploy_template_dir(template_root: &Path) -> PathBuf {
    template_root.join(DEPLOY_DIR)
}

/// Resolves the template root before any scratch work starts.
///
/// Order: explicit override (CLI flag), then the app config value, then an
/// upward search from the working directory and the executable location
/// for a `templates/` directory containing `workspace/`. Explicit and
/// configured roots must verify; only the search is allowed to keep
/// looking.
///
/// # Errors
///
/// Returns an error when an explicit or configured root is missing its
/// workspace template, or when nothing resolves at all.
pub fn resolve_template_root(
    explicit: Option<&Path>,
    configured: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return verify_template_root(root)
            .with_context(|| format!("Invalid template root '{}' (--template-root)", root.display()));
    }

    if let Some(root) = configured {
        return verify_template_root(root).with_context(|| {
            format!(
                "Invalid template root '{}' (paths.template_root in config)",
                root.display()
            )
        });
    }

    let mut starts: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        starts.push(cwd);
    }
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            starts.push(dir.to_path_buf());
        }
    }

    for start in &starts {
        if let Some(found) = search_upward(start) {
            return Ok(found);
        }
    }

    bail!(
        "Could not locate a '{TEMPLATES_DIR_NAME}/' directory containing '{WORKSPACE_DIR}/'. \
         Pass --template-root or set paths.template_root in the config."
    )
}

/// Checks that a candidate root exists and carries the workspace template.
fn verify_template_root(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        bail!("'{}' is not a directory", root.display());
    }
    let workspace = workspace_template_dir(root);
    if !workspace.is_dir() {
        bail!(
            "'{}' does not contain a '{WORKSPACE_DIR}/' template",
            root.display()
        );
    }
    Ok(root.to_path_buf())
}

/// Walks up from `start` looking for `templates/workspace/`, at most
/// [`TEMPLATE_SEARCH_DEPTH`] levels.
fn search_upward(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    for _ in 0..=TEMPLATE_SEARCH_DEPTH {
        let candidate = current.join(TEMPLATES_DIR_NAME);
        if candidate.join(WORKSPACE_DIR).is_dir() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
    None
}

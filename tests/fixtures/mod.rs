//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use brandforge::models::{BrandColors, ChartPalette, GenerateConfig, LogoSet, NeutralPalette};
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Creates the standard test branding config: Acme Corp on the zinc scale
/// with a magenta primary and Geist for both font roles.
pub fn test_config_basic() -> GenerateConfig {
    GenerateConfig {
        client_name: "Acme Corp".to_string(),
        project_slug: "acme-corp".to_string(),
        neutral_palette: NeutralPalette::Zinc,
        chart_palette: ChartPalette::Blue,
        brand_colors: BrandColors {
            primary: Some("#BC0059".to_string()),
            secondary: None,
            accent: None,
        },
        heading_font: "Geist".to_string(),
        body_font: "Geist".to_string(),
        radius: "0.625".to_string(),
        logos: LogoSet::default(),
    }
}

/// Variant with all four logo slots filled with tiny inline SVGs.
pub fn test_config_with_logos() -> GenerateConfig {
    let mut config = test_config_basic();
    config.logos = LogoSet {
        icon: Some(svg_asset("icon")),
        light: Some(svg_asset("light")),
        dark: Some(svg_asset("dark")),
        favicon: Some(svg_asset("favicon")),
    };
    config
}

/// Variant that opts out of Google Fonts entirely.
pub fn test_config_system_fonts() -> GenerateConfig {
    let mut config = test_config_basic();
    config.heading_font = "System".to_string();
    config.body_font = "System".to_string();
    config
}

/// Variant with a slug that fails structural validation.
pub fn test_config_invalid_slug() -> GenerateConfig {
    let mut config = test_config_basic();
    config.project_slug = "Not A Slug".to_string();
    config
}

/// Minimal but recognizable SVG for a logo slot.
pub fn svg_asset(label: &str) -> String {
    format!("<svg xmlns=\"http://www.w3.org/2000/svg\"><title>{label}</title></svg>")
}

/// Writes a branding config to a JSON file for CLI testing.
pub fn write_config_file(config: &GenerateConfig, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;
    fs::write(path, json)
}

/// Creates a config file in a temp directory and returns the path.
pub fn create_temp_config_file(config: &GenerateConfig) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("branding.json");
    write_config_file(config, &config_path).expect("Failed to write config file");
    (config_path, temp_dir)
}

/// Template root shipped with the repository. E2E happy paths run against
/// the real template so the shipped tree stays covered.
pub fn repo_template_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Builds a small controlled template root (workspace + deploy trees) in a
/// temp directory. The temp dir itself is the template root.
pub fn create_template_root() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let app = root.join("workspace/app");
    let public = root.join("workspace/public");
    fs::create_dir_all(&app).expect("Failed to create workspace dirs");
    fs::create_dir_all(&public).expect("Failed to create public dir");

    fs::write(
        root.join("workspace/package.json"),
        "{\n  \"name\": \"@launchpad/app\",\n  \"version\": \"0.1.0\",\n  \"private\": true\n}\n",
    )
    .expect("Failed to write package.json");

    fs::write(app.join("layout.tsx"), fixture_layout_tsx()).expect("Failed to write layout.tsx");
    fs::write(app.join("globals.css"), "/* placeholder */\n").expect("Failed to write globals.css");
    fs::write(
        app.join("page.tsx"),
        "export default function Home() {\n  return <h1>Welcome to Launchpad</h1>;\n}\n",
    )
    .expect("Failed to write page.tsx");

    for name in ["logo-icon.svg", "logo-light.svg", "logo-dark.svg"] {
        fs::write(public.join(name), "<svg><!-- placeholder --></svg>\n")
            .expect("Failed to write placeholder logo");
    }

    let deploy = root.join("deploy");
    fs::create_dir_all(&deploy).expect("Failed to create deploy dir");
    fs::write(
        deploy.join("Dockerfile"),
        "FROM node:20-alpine\nLABEL client=\"{{CLIENT_NAME}}\"\n",
    )
    .expect("Failed to write Dockerfile");
    fs::write(
        deploy.join("docker-compose.yml"),
        "services:\n  {{PROJECT_SLUG}}:\n    build: .\n",
    )
    .expect("Failed to write docker-compose.yml");
    fs::write(deploy.join(".dockerignore"), "node_modules\n.next\n")
        .expect("Failed to write .dockerignore");
    fs::write(deploy.join("DEPLOY.md"), "# Deploying {{CLIENT_NAME}}\n")
        .expect("Failed to write DEPLOY.md");

    temp_dir
}

/// Like [`create_template_root`] but with an entry file that carries no
/// font markers and no favicon metadata.
pub fn create_template_root_without_markers() -> TempDir {
    let temp_dir = create_template_root();
    let entry = temp_dir.path().join("workspace/app/layout.tsx");
    fs::write(
        &entry,
        "export default function RootLayout() {\n  return null;\n}\n",
    )
    .expect("Failed to strip entry file");
    temp_dir
}

/// Entry file used by the controlled template root: all three font
/// markers, the shipped favicon metadata, and the display identity token.
fn fixture_layout_tsx() -> &'static str {
    r#"import type { Metadata } from "next";
// __FONT_IMPORTS__
import "./globals.css";

// __FONT_DECLARATIONS__

export const metadata: Metadata = {
  title: "Launchpad",
  icons: { icon: "/favicon.ico" },
};

export default function RootLayout({ children }: { children: React.ReactNode }) {
  return (
    <html lang="en">
      <body className={`__FONT_VARIABLES__ antialiased`}>{children}</body>
    </html>
  );
}
"#
}

/// Points a spawned command's config lookup at an empty home so the real
/// user config never leaks into a test.
pub fn isolate_config(cmd: &mut Command, home: &Path) {
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
}

/// Entry names of a zip archive, in stored order.
pub fn archive_entry_names(bytes: &[u8]) -> Vec<String> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut archive = zip::ZipArchive::new(cursor).expect("Failed to open archive");
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        names.push(
            archive
                .by_index(i)
                .expect("Bad archive entry")
                .name()
                .to_string(),
        );
    }
    names
}

/// Reads one archive entry as raw bytes.
pub fn read_archive_bytes(bytes: &[u8], name: &str) -> Vec<u8> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut archive = zip::ZipArchive::new(cursor).expect("Failed to open archive");
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("Entry {name} not found in archive"));
    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .unwrap_or_else(|_| panic!("Failed to read entry {name}"));
    content
}

/// Reads one archive entry as UTF-8 text.
pub fn read_archive_text(bytes: &[u8], name: &str) -> String {
    let cursor = Cursor::new(bytes.to_vec());
    let mut archive = zip::ZipArchive::new(cursor).expect("Failed to open archive");
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("Entry {name} not found in archive"));
    let mut content = String::new();
    file.read_to_string(&mut content)
        .unwrap_or_else(|_| panic!("Entry {name} is not UTF-8 text"));
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_basic_config_is_valid() {
        let config = test_config_basic();
        assert!(config.validate().is_ok());
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_fixture_invalid_slug_fails_validation() {
        assert!(test_config_invalid_slug().validate().is_err());
    }

    #[test]
    fn test_fixture_template_root_shape() {
        let root = create_template_root();
        assert!(root.path().join("workspace/app/layout.tsx").is_file());
        assert!(root.path().join("deploy/Dockerfile").is_file());
    }

    #[test]
    fn test_repo_template_root_exists() {
        let root = repo_template_root();
        assert!(root.join("workspace/app/layout.tsx").is_file());
        assert!(root.join("deploy/DEPLOY.md").is_file());
    }
}

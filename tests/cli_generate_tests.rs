//! End-to-end tests for `brandforge generate`.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

/// Path to the brandforge binary
fn brandforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_brandforge")
}

#[test]
fn test_generate_happy_path_against_shipped_template() {
    let config = test_config_basic();
    let (config_path, _config_dir) = create_temp_config_file(&config);
    let out_dir = TempDir::new().unwrap();

    let output = Command::new(brandforge_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--out",
            out_dir.path().to_str().unwrap(),
            "--template-root",
            repo_template_root().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Generation should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Generated acme-corp-workspace.zip"));
    assert!(stdout.contains("Output:"));

    let archive_path = out_dir.path().join("acme-corp-workspace.zip");
    assert!(archive_path.is_file(), "Archive should be written to --out");

    let bytes = fs::read(&archive_path).unwrap();
    let names = archive_entry_names(&bytes);
    assert!(!names.is_empty());
    assert!(
        names.iter().all(|n| n.starts_with("acme-corp-workspace/")),
        "Every entry should live under the slug root: {names:?}"
    );
    assert!(names.contains(&"acme-corp-workspace/public/favicon.ico".to_string()));

    // Identity rewrite reached the package manifest
    let package = read_archive_text(&bytes, "acme-corp-workspace/package.json");
    assert!(package.contains("\"@acme-corp/app\""));
    assert!(!package.contains("launchpad"));

    // Theme stylesheet replaced the placeholder
    let css = read_archive_text(&bytes, "acme-corp-workspace/app/globals.css");
    assert!(css.starts_with("@import \"tailwindcss\";"));
    assert!(css.contains("--primary: oklch(0.5121 0.2061 3.98);"));
    assert!(css.contains("--neutral-950: oklch(0.1408 0.0044 285.82);"));
    assert!(css.contains("--radius: 0.625rem;"));

    // Font splice resolved both roles to a single Geist instance
    let layout = read_archive_text(&bytes, "acme-corp-workspace/app/layout.tsx");
    assert!(layout.contains("import { Geist } from \"next/font/google\";"));
    assert!(layout.contains("title: \"Acme Corp\""));
    assert!(!layout.contains("__FONT_"));

    // Deploy files landed at the workspace root with tokens substituted
    let dockerfile = read_archive_text(&bytes, "acme-corp-workspace/Dockerfile");
    assert!(dockerfile.contains("client=\"Acme Corp\""));
    let compose = read_archive_text(&bytes, "acme-corp-workspace/docker-compose.yml");
    assert!(compose.contains("acme-corp:"));
    assert!(!compose.contains("{{PROJECT_SLUG}}"));
    let deploy_md = read_archive_text(&bytes, "acme-corp-workspace/DEPLOY.md");
    assert!(deploy_md.contains("Acme Corp"));
}

#[test]
fn test_generate_log_file_records_stages() {
    let config = test_config_basic();
    let (config_path, _config_dir) = create_temp_config_file(&config);
    let out_dir = TempDir::new().unwrap();
    let log_path = out_dir.path().join("run.log");

    let output = Command::new(brandforge_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--out",
            out_dir.path().to_str().unwrap(),
            "--template-root",
            repo_template_root().to_str().unwrap(),
            "--log",
            log_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let log = fs::read_to_string(&log_path).expect("Log file should exist");
    assert!(log.contains("[INFO] Client: Acme Corp (acme-corp)"));
    for stage in [
        "Stage Created",
        "Stage Populated",
        "Stage Substituted",
        "Stage Finalized",
        "Stage TornDown",
    ] {
        assert!(log.contains(stage), "Log should record {stage}:\n{log}");
    }
    // With --log the progress lines move off stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Stage Created"));
}

#[test]
fn test_generate_keep_workspace_prints_scratch_path() {
    let config = test_config_basic();
    let (config_path, _config_dir) = create_temp_config_file(&config);
    let out_dir = TempDir::new().unwrap();
    let template_root = create_template_root();

    let output = Command::new(brandforge_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--out",
            out_dir.path().to_str().unwrap(),
            "--template-root",
            template_root.path().to_str().unwrap(),
            "--keep-workspace",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let workspace_line = stdout
        .lines()
        .find(|line| line.trim_start().starts_with("Workspace: "))
        .expect("Should print the kept workspace path");
    let scratch = workspace_line.trim_start().trim_start_matches("Workspace: ");
    let scratch_path = std::path::Path::new(scratch);
    assert!(
        scratch_path.is_dir(),
        "Kept scratch workspace should survive: {scratch}"
    );
    assert!(scratch_path.join("app/layout.tsx").is_file());

    fs::remove_dir_all(scratch_path).expect("Failed to clean up kept workspace");
}

#[test]
fn test_generate_nonexistent_config_exits_2() {
    let out_dir = TempDir::new().unwrap();

    let output = Command::new(brandforge_bin())
        .args([
            "generate",
            "--config",
            "/nonexistent/branding.json",
            "--out",
            out_dir.path().to_str().unwrap(),
            "--template-root",
            repo_template_root().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(2),
        "Nonexistent config should exit with code 2 (I/O error)"
    );
}

#[test]
fn test_generate_malformed_config_exits_1() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("broken.json");
    fs::write(&config_path, "{ not json").unwrap();

    let output = Command::new(brandforge_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--template-root",
            repo_template_root().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Malformed config should exit with code 1 (validation error)"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn test_generate_invalid_slug_exits_1() {
    let (config_path, _config_dir) = create_temp_config_file(&test_config_invalid_slug());
    let out_dir = TempDir::new().unwrap();

    let output = Command::new(brandforge_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--out",
            out_dir.path().to_str().unwrap(),
            "--template-root",
            repo_template_root().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid branding config"));
}

#[test]
fn test_generate_bad_template_root_exits_1() {
    let (config_path, _config_dir) = create_temp_config_file(&test_config_basic());
    let empty_root = TempDir::new().unwrap();

    let output = Command::new(brandforge_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--template-root",
            empty_root.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "A root without workspace/ should fail validation"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--template-root"));
}

#[test]
fn test_generate_default_output_dir() {
    let config = test_config_basic();
    let (config_path, _config_dir) = create_temp_config_file(&config);
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    let mut cmd = Command::new(brandforge_bin());
    cmd.args([
        "generate",
        "--config",
        config_path.to_str().unwrap(),
        "--template-root",
        repo_template_root().to_str().unwrap(),
    ])
    .current_dir(cwd.path());
    isolate_config(&mut cmd, home.path());

    let output = cmd.output().expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let archive = cwd.path().join("output/acme-corp-workspace.zip");
    assert!(
        archive.is_file(),
        "Without --out the archive should land in ./output"
    );
}

#[test]
fn test_generate_with_logos_writes_assets_and_patches_favicon() {
    let config = test_config_with_logos();
    let (config_path, _config_dir) = create_temp_config_file(&config);
    let out_dir = TempDir::new().unwrap();
    let template_root = create_template_root();

    let output = Command::new(brandforge_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--out",
            out_dir.path().to_str().unwrap(),
            "--template-root",
            template_root.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let bytes = fs::read(out_dir.path().join("acme-corp-workspace.zip")).unwrap();
    let icon = read_archive_text(&bytes, "acme-corp-workspace/public/logo-icon.svg");
    assert!(icon.contains("<title>icon</title>"));
    let favicon = read_archive_text(&bytes, "acme-corp-workspace/public/favicon.svg");
    assert!(favicon.contains("<title>favicon</title>"));

    let layout = read_archive_text(&bytes, "acme-corp-workspace/app/layout.tsx");
    assert!(layout.contains("icons: { icon: \"/favicon.svg\" }"));
    assert!(!layout.contains("favicon.ico"));
}

#[test]
fn test_generate_system_fonts_skips_google_imports() {
    let config = test_config_system_fonts();
    let (config_path, _config_dir) = create_temp_config_file(&config);
    let out_dir = TempDir::new().unwrap();
    let template_root = create_template_root();

    let output = Command::new(brandforge_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--out",
            out_dir.path().to_str().unwrap(),
            "--template-root",
            template_root.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let bytes = fs::read(out_dir.path().join("acme-corp-workspace.zip")).unwrap();
    let layout = read_archive_text(&bytes, "acme-corp-workspace/app/layout.tsx");
    assert!(!layout.contains("next/font/google"));
    assert!(!layout.contains("fontHeading"));
    assert!(!layout.contains("__FONT_"));
}

#[test]
fn test_generate_reports_config_warnings() {
    let mut config = test_config_basic();
    config.brand_colors.secondary = Some("#notahex".to_string());
    let (config_path, _config_dir) = create_temp_config_file(&config);
    let out_dir = TempDir::new().unwrap();

    let output = Command::new(brandforge_bin())
        .args([
            "generate",
            "--config",
            config_path.to_str().unwrap(),
            "--out",
            out_dir.path().to_str().unwrap(),
            "--template-root",
            repo_template_root().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    // Warnings do not block generation
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[WARN]"));
    assert!(stderr.contains("secondary"));
}

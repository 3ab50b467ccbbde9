//! End-to-end tests for `brandforge palettes`.

use std::process::Command;

/// Path to the brandforge binary
fn brandforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_brandforge")
}

#[test]
fn test_palettes_lists_neutrals_and_charts() {
    let output = Command::new(brandforge_bin())
        .args(["palettes"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Neutral palettes (5):"));
    assert!(stdout.contains("Chart palettes (17):"));
    for name in ["slate:", "gray:", "zinc:", "neutral:", "stone:"] {
        assert!(stdout.contains(name), "Missing neutral palette {name}");
    }
    assert!(stdout.contains("blue:"));
    assert!(stdout.contains("rose:"));
    // Shade rows carry the key and an oklch value
    assert!(stdout.contains("     50: oklch("));
    assert!(stdout.contains("    950: oklch("));
}

#[test]
fn test_palettes_json() {
    let output = Command::new(brandforge_bin())
        .args(["palettes", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let neutrals = result["neutrals"].as_array().expect("neutrals array");
    assert_eq!(neutrals.len(), 5);
    let charts = result["charts"].as_array().expect("charts array");
    assert_eq!(charts.len(), 17);

    // Every palette carries the full 11-shade scale
    for palette in neutrals.iter().chain(charts.iter()) {
        assert!(palette["name"].is_string());
        let shades = palette["shades"].as_array().expect("shades array");
        assert_eq!(shades.len(), 11, "palette {}", palette["name"]);
        assert_eq!(shades[0]["shade"], 50);
        assert_eq!(shades[10]["shade"], 950);
        assert!(shades[0]["value"]
            .as_str()
            .unwrap()
            .starts_with("oklch("));
    }

    let names: Vec<&str> = neutrals
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, ["slate", "gray", "zinc", "neutral", "stone"]);
}

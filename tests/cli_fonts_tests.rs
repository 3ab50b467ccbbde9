//! End-to-end tests for `brandforge fonts`.

use std::process::Command;

/// Path to the brandforge binary
fn brandforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_brandforge")
}

#[test]
fn test_fonts_lists_table() {
    let output = Command::new(brandforge_bin())
        .args(["fonts"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Available fonts (15):"));
    assert!(stdout.contains("Geist"));
    // Spaced display names map to underscore import identifiers
    assert!(stdout.contains("Open Sans"));
    assert!(stdout.contains("Open_Sans"));
    assert!(stdout.contains("Space_Grotesk"));
    assert!(stdout.contains("Use \"System\" to skip Google Font loading"));
}

#[test]
fn test_fonts_json() {
    let output = Command::new(brandforge_bin())
        .args(["fonts", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["count"], 15);
    let fonts = result["fonts"].as_array().expect("fonts array");
    assert_eq!(fonts.len(), 15);

    let open_sans = fonts
        .iter()
        .find(|f| f["name"] == "Open Sans")
        .expect("Open Sans should be listed");
    assert_eq!(open_sans["import"].as_str(), Some("Open_Sans"));

    // The sentinel is not a table entry
    assert!(!fonts.iter().any(|f| f["name"] == "System"));
}

//! Theme stylesheet composition.
//!
//! Builds the complete `globals.css` replacement for a workspace: a
//! Tailwind-v4-style sheet with three stacked layers of custom properties.
//! The base layer carries the radius and the selected neutral scale, the
//! brand layer carries brand slots plus destructive and chart series
//! values, and the semantic layer maps UI roles onto the layers below it
//! using `var()` references only. Output is deterministic: identical input
//! produces byte-identical CSS.

use crate::models::generate_config::ThemeConfig;
use crate::models::hex_to_oklch;
use crate::models::palette::{destructive_dark, destructive_light};

/// Default shades for absent brand slots, light mode:
/// `(background shade, foreground shade)` per slot in
/// primary/secondary/accent order.
const LIGHT_SLOT_DEFAULTS: [(u16, u16); 3] = [(900, 50), (100, 900), (100, 900)];

/// Default shades for absent brand slots, dark mode.
const DARK_SLOT_DEFAULTS: [(u16, u16); 3] = [(200, 900), (800, 50), (800, 50)];

/// Semantic role mappings for light mode. Values must be `var()`
/// references; raw colors live in the layers below.
const SEMANTIC_LIGHT: [(&str, &str); 24] = [
    ("--background", "var(--neutral-50)"),
    ("--foreground", "var(--neutral-950)"),
    ("--card", "var(--neutral-50)"),
    ("--card-foreground", "var(--neutral-950)"),
    ("--popover", "var(--neutral-50)"),
    ("--popover-foreground", "var(--neutral-950)"),
    ("--muted", "var(--neutral-100)"),
    ("--muted-foreground", "var(--neutral-500)"),
    ("--border", "var(--neutral-200)"),
    ("--input", "var(--neutral-200)"),
    ("--ring", "var(--primary)"),
    ("--chart-1", "var(--series-1)"),
    ("--chart-2", "var(--series-2)"),
    ("--chart-3", "var(--series-3)"),
    ("--chart-4", "var(--series-4)"),
    ("--chart-5", "var(--series-5)"),
    ("--sidebar", "var(--neutral-100)"),
    ("--sidebar-foreground", "var(--neutral-950)"),
    ("--sidebar-primary", "var(--primary)"),
    ("--sidebar-primary-foreground", "var(--primary-foreground)"),
    ("--sidebar-accent", "var(--accent)"),
    ("--sidebar-accent-foreground", "var(--accent-foreground)"),
    ("--sidebar-border", "var(--neutral-200)"),
    ("--sidebar-ring", "var(--primary)"),
];

/// Semantic role mappings for dark mode.
const SEMANTIC_DARK: [(&str, &str); 24] = [
    ("--background", "var(--neutral-950)"),
    ("--foreground", "var(--neutral-50)"),
    ("--card", "var(--neutral-900)"),
    ("--card-foreground", "var(--neutral-50)"),
    ("--popover", "var(--neutral-900)"),
    ("--popover-foreground", "var(--neutral-50)"),
    ("--muted", "var(--neutral-800)"),
    ("--muted-foreground", "var(--neutral-400)"),
    ("--border", "var(--neutral-800)"),
    ("--input", "var(--neutral-800)"),
    ("--ring", "var(--primary)"),
    ("--chart-1", "var(--series-1)"),
    ("--chart-2", "var(--series-2)"),
    ("--chart-3", "var(--series-3)"),
    ("--chart-4", "var(--series-4)"),
    ("--chart-5", "var(--series-5)"),
    ("--sidebar", "var(--neutral-900)"),
    ("--sidebar-foreground", "var(--neutral-50)"),
    ("--sidebar-primary", "var(--primary)"),
    ("--sidebar-primary-foreground", "var(--primary-foreground)"),
    ("--sidebar-accent", "var(--accent)"),
    ("--sidebar-accent-foreground", "var(--accent-foreground)"),
    ("--sidebar-border", "var(--neutral-800)"),
    ("--sidebar-ring", "var(--primary)"),
];

/// Composes the full stylesheet for a theme configuration.
///
/// The sheet is, in order: the Tailwind import, the dark-mode custom
/// variant, the base layer (`:root`), the brand layer (`:root` + `.dark`),
/// and the semantic layer (`:root` + `.dark`). Sections are separated by
/// blank lines and the output ends with a trailing newline.
#[must_use]
pub fn compose_theme_stylesheet(config: &ThemeConfig) -> String {
    let sections = [
        "@import \"tailwindcss\";\n".to_string(),
        "@custom-variant dark (&:is(.dark *));\n".to_string(),
        base_layer(config),
        brand_block(
            config,
            ":root",
            LIGHT_SLOT_DEFAULTS,
            destructive_light(),
            config.chart_palette.light_series(),
        ),
        brand_block(
            config,
            ".dark",
            DARK_SLOT_DEFAULTS,
            destructive_dark(),
            config.chart_palette.dark_series(),
        ),
        semantic_block(":root", &SEMANTIC_LIGHT),
        semantic_block(".dark", &SEMANTIC_DARK),
    ];
    sections.join("\n")
}

/// Base layer: the radius plus the full neutral scale.
///
/// The radius string passes through verbatim; "0.625" becomes
/// `--radius: 0.625rem` without numeric parsing.
fn base_layer(config: &ThemeConfig) -> String {
    let mut props = Vec::new();
    props.push(("--radius".to_string(), format!("{}rem", config.radius)));
    for (key, value) in config.neutral_palette.scale().entries() {
        props.push((format!("--neutral-{key}"), value.to_string()));
    }
    block(":root", &props)
}

/// Brand layer block for one mode.
///
/// A supplied brand color is converted once and used as-is with a
/// neutral-50 foreground; an absent slot aliases the neutral scale through
/// the per-slot defaults, so the converter is never consulted for it.
fn brand_block(
    config: &ThemeConfig,
    selector: &str,
    slot_defaults: [(u16, u16); 3],
    destructive: &str,
    series: [&'static str; 5],
) -> String {
    let slots = [
        ("primary", config.brand_colors.primary.as_deref()),
        ("secondary", config.brand_colors.secondary.as_deref()),
        ("accent", config.brand_colors.accent.as_deref()),
    ];

    let mut props = Vec::new();
    for ((slot, supplied), (shade, foreground_shade)) in slots.into_iter().zip(slot_defaults) {
        if let Some(hex) = supplied {
            props.push((format!("--{slot}"), hex_to_oklch(hex)));
            props.push((format!("--{slot}-foreground"), "var(--neutral-50)".to_string()));
        } else {
            props.push((format!("--{slot}"), format!("var(--neutral-{shade})")));
            props.push((
                format!("--{slot}-foreground"),
                format!("var(--neutral-{foreground_shade})"),
            ));
        }
    }

    props.push(("--destructive".to_string(), destructive.to_string()));
    props.push(("--destructive-foreground".to_string(), "var(--neutral-50)".to_string()));

    for (i, value) in series.iter().enumerate() {
        props.push((format!("--series-{}", i + 1), (*value).to_string()));
    }

    block(selector, &props)
}

/// Semantic layer block for one mode, straight from the fixed tables.
fn semantic_block(selector: &str, mappings: &[(&str, &str)]) -> String {
    let props: Vec<(String, String)> = mappings
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect();
    block(selector, &props)
}

/// Renders one `selector { ... }` block with two-space indentation.
fn block(selector: &str, props: &[(String, String)]) -> String {
    let mut output = String::new();
    output.push_str(selector);
    output.push_str(" {\n");
    for (name, value) in props {
        output.push_str(&format!("  {name}: {value};\n"));
    }
    output.push_str("}\n");
    output
}

//! Branding input model for workspace generation.
//!
//! A `GenerateConfig` arrives as camelCase JSON, is validated structurally
//! before any filesystem work, and is then treated as trusted by the
//! pipeline. Color and font *content* stays soft: a bad hex or unknown font
//! name degrades inside the composers instead of failing a run, so
//! `validate` reports those as warnings rather than errors.

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::color::is_valid_hex;
use super::fonts::{lookup_font, SYSTEM_FONT};
use super::palette::{ChartPalette, NeutralPalette};

/// Full branding configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConfig {
    /// Client display name, free text ("Acme Corp").
    pub client_name: String,
    /// Project slug used in identifiers and file names ("acme-corp").
    pub project_slug: String,
    /// Neutral scale for the stylesheet base layer.
    pub neutral_palette: NeutralPalette,
    /// Chromatic scale feeding the chart series.
    #[serde(default)]
    pub chart_palette: ChartPalette,
    /// Optional brand hex colors for the primary/secondary/accent slots.
    #[serde(default)]
    pub brand_colors: BrandColors,
    /// Heading font display name, resolved tolerantly.
    pub heading_font: String,
    /// Body font display name, resolved tolerantly.
    pub body_font: String,
    /// Border radius in rem, passed through to CSS verbatim.
    pub radius: String,
    /// Optional SVG logo assets.
    #[serde(default)]
    pub logos: LogoSet,
}

/// Brand hex colors. Absent slots fall back to neutral-scale defaults in
/// the stylesheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

/// SVG logo assets as inline text. Absent slots keep the template's
/// placeholder assets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoSet {
    pub icon: Option<String>,
    pub light: Option<String>,
    pub dark: Option<String>,
    pub favicon: Option<String>,
}

/// Theme-relevant projection of a [`GenerateConfig`], consumed by the
/// stylesheet composer.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    pub neutral_palette: NeutralPalette,
    pub chart_palette: ChartPalette,
    pub brand_colors: BrandColors,
    pub radius: String,
}

impl GenerateConfig {
    /// Structural validation, run by callers before generation.
    ///
    /// # Errors
    ///
    /// Returns an error when the client name is empty, the slug does not
    /// match `^[a-z][a-z0-9-]*$`, or a required free-text field is blank.
    pub fn validate(&self) -> Result<()> {
        if self.client_name.trim().is_empty() {
            bail!("clientName must not be empty");
        }

        let slug_regex =
            Regex::new(r"^[a-z][a-z0-9-]*$").context("Failed to compile slug pattern")?;
        if !slug_regex.is_match(&self.project_slug) {
            bail!(
                "projectSlug '{}' is invalid: must start with a lowercase letter \
                 and contain only lowercase letters, digits, and hyphens",
                self.project_slug
            );
        }

        if self.heading_font.trim().is_empty() {
            bail!("headingFont must not be empty");
        }
        if self.body_font.trim().is_empty() {
            bail!("bodyFont must not be empty");
        }
        if self.radius.trim().is_empty() {
            bail!("radius must not be empty");
        }

        Ok(())
    }

    /// Non-fatal issues worth surfacing before a run: hex strings the
    /// converter would fall back on, font names outside the table.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let slots = [
            ("primary", &self.brand_colors.primary),
            ("secondary", &self.brand_colors.secondary),
            ("accent", &self.brand_colors.accent),
        ];
        for (slot, value) in slots {
            if let Some(hex) = value {
                if !is_valid_hex(hex) {
                    warnings.push(format!(
                        "brand color '{slot}' value '{hex}' is not a valid hex color \
                         and will fall back to neutral gray"
                    ));
                }
            }
        }

        for (role, name) in [("heading", &self.heading_font), ("body", &self.body_font)] {
            let trimmed = name.trim();
            if !trimmed.eq_ignore_ascii_case(SYSTEM_FONT) && lookup_font(trimmed).is_none() {
                warnings.push(format!(
                    "{role} font '{name}' is not a known font; the workspace will use \
                     the system font stack"
                ));
            }
        }

        warnings
    }

    /// Projects the theme-relevant subset for the stylesheet composer.
    #[must_use]
    pub fn theme_config(&self) -> ThemeConfig {
        ThemeConfig {
            neutral_palette: self.neutral_palette,
            chart_palette: self.chart_palette,
            brand_colors: self.brand_colors.clone(),
            radius: self.radius.clone(),
        }
    }

    /// Root folder name inside the generated archive.
    #[must_use]
    pub fn workspace_root_name(&self) -> String {
        format!("{}-workspace", self.project_slug)
    }

    /// File name of the generated archive.
    #[must_use]
    pub fn archive_filename(&self) -> String {
        format!("{}-workspace.zip", self.project_slug)
    }
}

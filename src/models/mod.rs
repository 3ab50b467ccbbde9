//! Data models for branding configuration and palette data.
//!
//! This module contains the core data structures used throughout the
//! generator. Models are independent of the CLI and the filesystem: color
//! conversion and the palette/font tables are pure, and the input model
//! only validates itself.

pub mod color;
pub mod fonts;
pub mod generate_config;
pub mod palette;

// Re-export all model types
pub use color::{hex_to_oklch, is_valid_hex, FALLBACK_OKLCH};
pub use fonts::{lookup_font, FontEntry, FONT_TABLE, SYSTEM_FONT};
pub use generate_config::{BrandColors, GenerateConfig, LogoSet, ThemeConfig};
pub use palette::{
    ChartPalette, NeutralPalette, PaletteScale, DARK_SERIES_SHADES, LIGHT_SERIES_SHADES,
    SHADE_KEYS,
};

//! CLI command handlers for Brandforge.
//!
//! This module provides headless, scriptable access to workspace generation
//! for automation, testing, and CI/CD integration.

pub mod common;
pub mod config;
pub mod doctor;
pub mod fonts;
pub mod generate;
pub mod palettes;
pub mod theme;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use config::ConfigArgs;
pub use doctor::DoctorArgs;
pub use fonts::FontsArgs;
pub use generate::GenerateArgs;
pub use palettes::PalettesArgs;
pub use theme::ThemeArgs;
pub use validate::ValidateArgs;

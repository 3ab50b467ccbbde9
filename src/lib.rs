//! Brandforge library
//!
//! This library turns a client branding config into a ready-to-build,
//! zipped dashboard workspace: palette and brand colors become an OKLCH
//! theme stylesheet, font choices become framework font fragments, and a
//! workspace template is copied, rewritten, and archived in one run.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod doctor;
pub mod models;
pub mod theme;
pub mod workspace;

//! Theme composition: stylesheet and font fragments.
//!
//! Pure string builders with no filesystem access. The materializer calls
//! into this module once per run and writes the results into the scratch
//! workspace.

pub mod fonts;
pub mod stylesheet;

pub use fonts::FontSelection;
pub use stylesheet::compose_theme_stylesheet;

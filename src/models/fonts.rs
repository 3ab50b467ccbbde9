//! Static table of supported Google fonts.
//!
//! Each entry pairs the display name shown to users with the identifier
//! exported by `next/font/google` (spaces become underscores). The table is
//! a fixed allow-list; names outside it, including the `System` sentinel,
//! resolve to nothing and leave the workspace on the OS font stack.

/// Sentinel name meaning "no Google font, use the OS stack".
pub const SYSTEM_FONT: &str = "System";

/// One supported font: display name plus `next/font/google` export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontEntry {
    /// Human-facing name as it appears in configs ("Open Sans").
    pub display_name: &'static str,
    /// Identifier imported from `next/font/google` ("Open_Sans").
    pub import_ident: &'static str,
}

/// Supported fonts in menu order.
pub const FONT_TABLE: [FontEntry; 15] = [
    FontEntry { display_name: "Geist", import_ident: "Geist" },
    FontEntry { display_name: "Geist Mono", import_ident: "Geist_Mono" },
    FontEntry { display_name: "Inter", import_ident: "Inter" },
    FontEntry { display_name: "Roboto", import_ident: "Roboto" },
    FontEntry { display_name: "Open Sans", import_ident: "Open_Sans" },
    FontEntry { display_name: "Lato", import_ident: "Lato" },
    FontEntry { display_name: "Montserrat", import_ident: "Montserrat" },
    FontEntry { display_name: "Poppins", import_ident: "Poppins" },
    FontEntry { display_name: "Raleway", import_ident: "Raleway" },
    FontEntry { display_name: "DM Sans", import_ident: "DM_Sans" },
    FontEntry { display_name: "Space Grotesk", import_ident: "Space_Grotesk" },
    FontEntry { display_name: "Playfair Display", import_ident: "Playfair_Display" },
    FontEntry { display_name: "Merriweather", import_ident: "Merriweather" },
    FontEntry { display_name: "IBM Plex Sans", import_ident: "IBM_Plex_Sans" },
    FontEntry { display_name: "Source Serif 4", import_ident: "Source_Serif_4" },
];

/// Resolves a display name against the table, case-insensitively.
///
/// Returns `None` for unknown names and for [`SYSTEM_FONT`]; callers treat
/// both as "contribute no font code".
#[must_use]
pub fn lookup_font(name: &str) -> Option<&'static FontEntry> {
    let name = name.trim();
    FONT_TABLE
        .iter()
        .find(|entry| entry.display_name.eq_ignore_ascii_case(name))
}

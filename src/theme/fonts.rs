//! Font fragment composition for the workspace entry file.
//!
//! Turns the two requested font names into the three code fragments the
//! materializer splices into `app/layout.tsx`: the `next/font/google`
//! imports, the loader declarations, and the `className` variable
//! references. Unknown names and the `System` sentinel contribute nothing,
//! and a shared heading/body font collapses to a single loader.

use crate::models::fonts::{lookup_font, FontEntry};

/// Resolved font pair for one generation.
#[derive(Debug, Clone, Copy)]
pub struct FontSelection {
    heading: Option<&'static FontEntry>,
    body: Option<&'static FontEntry>,
}

impl FontSelection {
    /// Resolves both names against the font table. Resolution is tolerant:
    /// anything outside the table becomes `None` and drops out of the
    /// fragments.
    #[must_use]
    pub fn new(heading: &str, body: &str) -> Self {
        Self {
            heading: lookup_font(heading),
            body: lookup_font(body),
        }
    }

    /// One import line per distinct resolvable font, newline-joined.
    /// Empty when nothing resolved.
    #[must_use]
    pub fn import_fragment(&self) -> String {
        let mut idents: Vec<&str> = Vec::new();
        if let Some(heading) = self.heading {
            idents.push(heading.import_ident);
        }
        if let Some(body) = self.body {
            if !idents.contains(&body.import_ident) {
                idents.push(body.import_ident);
            }
        }
        idents
            .iter()
            .map(|ident| format!("import {{ {ident} }} from \"next/font/google\";"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Loader declarations: `fontHeading` bound to `--font-heading` and
    /// `fontBody` bound to `--font-body`. When heading and body share a
    /// font only `fontHeading` is declared and serves both roles.
    #[must_use]
    pub fn declaration_fragment(&self) -> String {
        let mut lines = Vec::new();
        if let Some(heading) = self.heading {
            lines.push(declaration("fontHeading", heading.import_ident, "--font-heading"));
        }
        if let Some(body) = self.body {
            if !self.deduplicated() {
                lines.push(declaration("fontBody", body.import_ident, "--font-body"));
            }
        }
        lines.join("\n")
    }

    /// Space-joined `${...variable}` template expressions for the
    /// `className`, reduced to the single declared instance when
    /// deduplicated and empty when nothing resolved.
    #[must_use]
    pub fn variable_reference_fragment(&self) -> String {
        let mut references = Vec::new();
        if self.heading.is_some() {
            references.push("${fontHeading.variable}");
        }
        if self.body.is_some() && !self.deduplicated() {
            references.push("${fontBody.variable}");
        }
        references.join(" ")
    }

    /// True when heading and body resolved to the same table entry.
    fn deduplicated(&self) -> bool {
        matches!((self.heading, self.body), (Some(h), Some(b)) if h == b)
    }
}

fn declaration(binding: &str, ident: &str, variable: &str) -> String {
    format!("const {binding} = {ident}({{ subsets: [\"latin\"], variable: \"{variable}\" }});")
}

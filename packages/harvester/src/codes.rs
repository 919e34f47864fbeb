//! Code tables resolving the portal's short categorical codes to
//! human-readable labels.
//!
//! The tables are static configuration injected into the extractor, so a
//! new portal code only requires a table entry, not an extraction change.
//! A code found in a document but missing from its table is a data error
//! (`HarvestError::UnresolvedCode`), never a silent omission.

use crate::error::{HarvestError, Result};

/// Fixed mapping from categorical code to display label for one field.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    field: &'static str,
    tag: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    /// Create a table for `field`, sourced from elements tagged `tag`.
    #[must_use]
    pub const fn new(
        field: &'static str,
        tag: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            field,
            tag,
            entries,
        }
    }

    /// Output column name this table resolves for.
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Source XML tag carrying the codes.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Resolve a code to its label.
    ///
    /// # Errors
    /// `HarvestError::UnresolvedCode` if the code has no entry.
    pub fn resolve(&self, code: &str) -> Result<&'static str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, label)| *label)
            .ok_or_else(|| HarvestError::UnresolvedCode {
                field: self.field,
                code: code.to_string(),
            })
    }
}

/// Biological property codes attached to a compound.
///
/// A compound may carry several of these; the extractor resolves each and
/// joins the labels in document order.
pub const BIOLOGICAL_PROPERTIES: CodeTable = CodeTable::new(
    "Biological Properties",
    "which",
    &[
        ("1", "Anticancer"),
        ("2", "Antibacterial"),
        ("3", "Antifungal"),
        ("4", "Anti-inflammatory"),
        ("5", "Antioxidant"),
        ("6", "Antileishmanial"),
        ("7", "Antitrypanosomal"),
        ("8", "Antiviral"),
        ("9", "Cytotoxic"),
        ("10", "Analgesic"),
        ("11", "Antimalarial"),
        ("12", "Other"),
    ],
);

/// How the compound sample was obtained. At most one per compound.
pub const SOURCE_TYPES: CodeTable = CodeTable::new(
    "Source Type",
    "origem",
    &[
        ("1", "Isolation"),
        ("2", "Semisynthesis"),
        ("3", "Biotransformation"),
    ],
);

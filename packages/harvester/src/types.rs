//! Core data types for the harvester.

/// Identifier of one compound in the portal catalog.
///
/// Only ever obtained from the index query; unique within a run.
pub type CompoundId = u32;

/// One compound flattened to ordered (column, value) pairs.
///
/// Every record produced in a run carries the identical column sequence:
/// the mapped columns of the field map followed by the derived columns.
/// The exporter relies on this to derive the CSV header from the first
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRecord {
    fields: Vec<(&'static str, String)>,
}

impl CompoundRecord {
    /// Create a record from ordered (column, value) pairs.
    #[must_use]
    pub fn from_fields(fields: Vec<(&'static str, String)>) -> Self {
        Self { fields }
    }

    /// Look up a value by column name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Column names, in output order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Values, in output order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

//! Flattening one compound detail document into a uniform record.
//!
//! Extraction is a pure function of the parsed document and the
//! extraction schema: the same schema applied to every document
//! guarantees every record carries the identical ordered column set,
//! whatever tags the document actually contains.

use roxmltree::Document;

use crate::codes::{CodeTable, BIOLOGICAL_PROPERTIES, SOURCE_TYPES};
use crate::error::Result;
use crate::fields::{FieldKind, MappedField, FIELD_MAP, ORIGIN_TAGS, SPECIES_FIELD};
use crate::types::CompoundRecord;
use crate::xml::{elements_by_tag, get_text, inline_text};

/// Everything the extractor needs to flatten a detail document: the
/// ordered field map plus the code tables for the categorical fields.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionSchema {
    /// Mapped columns, in output order.
    pub fields: &'static [MappedField],
    /// Multi-valued categorical field (all codes resolved and joined).
    pub multi_code: CodeTable,
    /// Single-valued categorical field (first code resolved).
    pub single_code: CodeTable,
}

impl ExtractionSchema {
    /// The portal's compound detail schema.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: FIELD_MAP,
            multi_code: BIOLOGICAL_PROPERTIES,
            single_code: SOURCE_TYPES,
        }
    }
}

impl Default for ExtractionSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten one detail document into a record.
///
/// Column order is the field map order followed by the derived columns
/// (species origin, then the categorical fields). Absent tags yield empty
/// strings, so the column set never varies between documents.
///
/// # Errors
/// `HarvestError::UnresolvedCode` if a categorical code present in the
/// document has no entry in its code table.
pub fn extract_record(doc: &Document<'_>, schema: &ExtractionSchema) -> Result<CompoundRecord> {
    let mut fields = Vec::with_capacity(schema.fields.len() + 3);

    for mapped in schema.fields {
        let value = match mapped.kind {
            FieldKind::Single => first_value(doc, mapped.tag),
            FieldKind::Joined => joined_values(doc, mapped.tag),
        };
        fields.push((mapped.name, value));
    }

    fields.push((SPECIES_FIELD, compose_origin(doc)));
    fields.push((
        schema.multi_code.field(),
        resolve_all_codes(doc, &schema.multi_code)?,
    ));
    fields.push((
        schema.single_code.field(),
        resolve_first_code(doc, &schema.single_code)?,
    ));

    Ok(CompoundRecord::from_fields(fields))
}

/// First matching element's text, or empty string.
fn first_value(doc: &Document<'_>, tag: &str) -> String {
    elements_by_tag(doc, tag)
        .next()
        .map(inline_text)
        .unwrap_or_default()
}

/// All matching elements' texts joined ", ", in document order.
fn joined_values(doc: &Document<'_>, tag: &str) -> String {
    elements_by_tag(doc, tag)
        .map(|node| get_text(node))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compose the origin triple (family, genus, species) in fixed order.
///
/// Components whose tag is absent are skipped, so a document without any
/// origin tags yields an empty string rather than stray spaces.
fn compose_origin(doc: &Document<'_>) -> String {
    ORIGIN_TAGS
        .iter()
        .map(|tag| first_value(doc, tag))
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve every code for the table's tag, joined ", " in document order.
fn resolve_all_codes(doc: &Document<'_>, table: &CodeTable) -> Result<String> {
    let labels = elements_by_tag(doc, table.tag())
        .map(|node| table.resolve(&get_text(node)))
        .collect::<Result<Vec<_>>>()?;
    Ok(labels.join(", "))
}

/// Resolve the first code for the table's tag; absence yields an empty
/// string, but a present, unresolvable code is an error.
fn resolve_first_code(doc: &Document<'_>, table: &CodeTable) -> Result<String> {
    match elements_by_tag(doc, table.tag()).next() {
        Some(node) => Ok(table.resolve(&get_text(node))?.to_string()),
        None => Ok(String::new()),
    }
}

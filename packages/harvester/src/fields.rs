//! The field map: ordered correspondence between output columns and
//! source XML tags.
//!
//! The order of entries here is load-bearing: it is the extraction order
//! and therefore the CSV column order. Derived columns (species origin,
//! categorical code fields) are appended after the mapped columns by the
//! extractor.

/// How a mapped field condenses matching elements into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Take the first matching element's text.
    Single,
    /// Join all matching elements' texts with ", ", in document order.
    Joined,
}

/// One output column mapped directly to a source tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedField {
    /// Output column name.
    pub name: &'static str,
    /// Source XML tag name.
    pub tag: &'static str,
    /// Single-valued or multi-valued.
    pub kind: FieldKind,
}

impl MappedField {
    const fn single(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag,
            kind: FieldKind::Single,
        }
    }

    const fn joined(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag,
            kind: FieldKind::Joined,
        }
    }
}

/// The mapped columns of the compound detail document, in output order.
pub const FIELD_MAP: &[MappedField] = &[
    MappedField::single("NuBBE", "cod"),
    MappedField::single("Common Name", "nome"),
    MappedField::single("Inchi", "inchi"),
    MappedField::single("Inchikey", "inchikey"),
    MappedField::single("Chemical Class", "classe"),
    MappedField::single("Mol Formula", "formol"),
    MappedField::single("SMILES", "smiles"),
    MappedField::single("Molecula Mass", "massa_molar"),
    MappedField::single("Monoisotropic Mass", "massa_monoisotopica"),
    MappedField::single("cLogP", "logp"),
    MappedField::single("TPSA", "tpsa"),
    MappedField::single("Lipinski Violations", "nvlr"),
    MappedField::single("H-bond acceptors", "non"),
    MappedField::single("H-bond donors", "nohnh"),
    MappedField::single("Rotatable Bonds", "nrotb"),
    MappedField::single("Molecular Volume", "mol_vol"),
    MappedField::joined("References", "compilado"),
];

/// Output column for the composed origin triple.
pub const SPECIES_FIELD: &str = "Species";

/// Source tags composing the origin triple, in composition order:
/// family, genus, species.
pub const ORIGIN_TAGS: [&str; 3] = ["familia", "genero", "especie"];

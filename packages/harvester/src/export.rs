//! CSV export of the harvested catalog.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{HarvestError, Result};
use crate::types::CompoundRecord;

/// Write the catalog as CSV: one header row derived from the first
/// record's column sequence, then one row per record, in order.
///
/// # Errors
/// `EmptyCatalog` when `records` is empty; `Csv` on write failure.
pub fn write_csv<W: Write>(records: &[CompoundRecord], writer: W) -> Result<()> {
    let Some(first) = records.first() else {
        return Err(HarvestError::EmptyCatalog);
    };

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(first.columns())?;

    for record in records {
        debug_assert!(
            record.columns().eq(first.columns()),
            "every record must carry the same column sequence"
        );
        csv_writer.write_record(record.values())?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export the catalog to a CSV file at `path`.
pub fn export_csv(records: &[CompoundRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(records, BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows = records.len(), "catalog exported");
    Ok(())
}

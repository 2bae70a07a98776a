//! Serialize a transaction table to the four-column output file.

use std::path::Path;

use tally_core::{CSV_HEADER, Result, TallyError, TransactionTable};

use crate::reply::parse_reply;

/// Write `table` to `path`, header included, overwriting any existing file.
/// Dates are rendered ISO (`YYYY-MM-DD`); amounts as plain decimals.
pub fn write_table(table: &TransactionTable, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| TallyError::OutputWrite(format!("{}: {e}", path.display())))?;

    let write_err = |e: csv::Error| TallyError::OutputWrite(format!("{}: {e}", path.display()));

    wtr.write_record(CSV_HEADER.split(',')).map_err(write_err)?;
    for record in &table.records {
        wtr.write_record(&[
            record.date.format("%Y-%m-%d").to_string(),
            record.description.clone(),
            record.amount.to_string(),
            record.category.clone(),
        ])
        .map_err(write_err)?;
    }

    wtr.flush()
        .map_err(|e| TallyError::OutputWrite(format!("{}: {e}", path.display())))?;

    log::info!("wrote {} row(s) to {}", table.len(), path.display());
    Ok(())
}

/// Read a previously written output file back into a table.
pub fn read_table(path: &Path) -> Result<TransactionTable> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| TallyError::DocumentRead(format!("{}: {e}", path.display())))?;
    parse_reply(&contents)
}

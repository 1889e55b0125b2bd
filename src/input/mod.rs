//! Sheet reading.
//!
//! - [`sheet`] - workbooks via calamine (first worksheet only)
//! - [`csv`](self::csv) - comma separated files via the csv crate

mod csv;
mod sheet;

pub use self::csv::read_csv;
pub use self::sheet::read_first_sheet;

use crate::error::PtrGenError;
use crate::models::SubnetEntry;
use std::path::Path;

/// Read the `(CIDR, name)` rows of `path` in sheet order.
///
/// Cells are trimmed and rows with an empty CIDR cell are dropped.
///
/// # Errors
/// * [`PtrGenError::MissingInputFile`] - `path` does not exist
/// * [`PtrGenError::Workbook`] / [`PtrGenError::Csv`] - the file could not be parsed
pub fn read_entries(path: &Path) -> Result<Vec<SubnetEntry>, PtrGenError> {
    if !path.exists() {
        return Err(PtrGenError::MissingInputFile(path.to_path_buf()));
    }

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let rows = if is_csv {
        log::info!("Reading csv file: {}", path.display());
        read_csv(path)?
    } else {
        log::info!("Reading workbook: {}", path.display());
        read_first_sheet(path)?
    };

    let entries = entries_from_rows(rows);
    log::info!("# Got subnet count = {}", entries.len());
    Ok(entries)
}

/// Trim cells and keep only rows that carry a CIDR.
pub fn entries_from_rows(rows: Vec<(usize, String, String)>) -> Vec<SubnetEntry> {
    rows.into_iter()
        .filter_map(|(row, cidr, name)| {
            let cidr = cidr.trim();
            if cidr.is_empty() {
                log::trace!("skipping row {row}: empty CIDR");
                return None;
            }
            Some(SubnetEntry::new(row, cidr, name.trim()))
        })
        .collect()
}

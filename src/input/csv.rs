//! Comma separated input, for sheets exported as `.csv`.

use crate::error::PtrGenError;
use csv::ReaderBuilder;
use std::path::Path;

/// Read the first two fields of every record.
///
/// Returns `(line, field 1, field 2)` where `line` is the 1-based line the
/// record starts on. Missing fields come back as empty strings and blank
/// lines produce no record.
pub fn read_csv(path: &Path) -> Result<Vec<(usize, String, String)>, PtrGenError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    reader
        .records()
        .map(|record| -> Result<(usize, String, String), PtrGenError> {
            let record = record?;
            let line = record.position().map_or(0, |pos| pos.line() as usize);
            let cidr = record.get(0).unwrap_or_default().to_string();
            let name = record.get(1).unwrap_or_default().to_string();
            Ok((line, cidr, name))
        })
        .collect()
}

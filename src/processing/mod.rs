//! Conversion logic.
//!
//! - [`expand`] - CIDR to per-/24 segments
//! - [`name`] - wildcard PTR names for each segment

mod expand;
mod name;

pub use expand::expand;
pub use name::{resolve_name, resolve_segment_name, WILDCARD_PREFIX};

use crate::error::PtrGenError;
use crate::models::{ExpandedEntry, NamedSegment, SubnetEntry};

/// Expand one sheet row into its named segments.
pub fn expand_entry(entry: &SubnetEntry) -> Result<ExpandedEntry, PtrGenError> {
    let segments = expand(&entry.cidr)?
        .into_iter()
        .map(|segment| -> Result<NamedSegment, PtrGenError> {
            let name = resolve_segment_name(&segment, &entry.name)?;
            Ok(NamedSegment { segment, name })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "row {}: {} -> {} segment(s)",
        entry.row,
        entry.cidr,
        segments.len()
    );
    Ok(ExpandedEntry {
        entry: entry.clone(),
        segments,
    })
}

/// Expand every entry in order, stopping at the first failure.
///
/// The returned error carries the row number of the offending entry.
pub fn expand_entries(entries: &[SubnetEntry]) -> Result<Vec<ExpandedEntry>, PtrGenError> {
    entries
        .iter()
        .map(|entry| expand_entry(entry).map_err(|e| e.at_row(entry.row)))
        .collect()
}

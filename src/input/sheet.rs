//! Workbook reading through calamine (xlsx, xlsm, xls, ods).

use crate::error::PtrGenError;
use calamine::{open_workbook_auto, Reader};
use std::path::Path;

/// Read columns A and B of the first worksheet.
///
/// Returns `(row, column A, column B)` with 1-based row numbers; missing
/// cells come back as empty strings.
pub fn read_first_sheet(path: &Path) -> Result<Vec<(usize, String, String)>, PtrGenError> {
    let workbook_error = |source| PtrGenError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PtrGenError::NoWorksheet(path.to_path_buf()))?
        .map_err(workbook_error)?;

    let (start, end) = match (range.start(), range.end()) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            log::warn!("first worksheet of {} is empty", path.display());
            return Ok(Vec::new());
        }
    };
    log::debug!(
        "worksheet range of {}: {:?}..={:?}",
        path.display(),
        start,
        end
    );

    let cell = |row: u32, col: u32| {
        range
            .get_value((row, col))
            .map(|value| value.to_string())
            .unwrap_or_default()
    };

    Ok((start.0..=end.0)
        .map(|row| (row as usize + 1, cell(row, 0), cell(row, 1)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_first_sheet_fixture() {
        let rows = read_first_sheet(Path::new("tests/test_data/subnets.xlsx"))
            .expect("Error reading workbook fixture");
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[0],
            (
                1,
                "192.168.47.0/24".to_string(),
                "$-$-$-$.example.com.".to_string()
            )
        );
        // blank row stays in place, filtering happens later
        assert_eq!(rows[2], (3, String::new(), String::new()));
    }

    #[test]
    fn test_read_first_sheet_not_a_workbook() {
        let err = read_first_sheet(Path::new("Cargo.toml")).unwrap_err();
        assert!(matches!(err, PtrGenError::Workbook { .. }));
    }
}

//! Error type shared by every stage of the conversion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Length of the wildcard prefix (`$-$-$-$.`) expected at the start of a subnet name.
pub const NAME_PREFIX_LEN: usize = 8;

#[derive(Error, Debug)]
pub enum PtrGenError {
    #[error("invalid IPv4 CIDR '{cidr}': {reason}")]
    InvalidCidr { cidr: String, reason: String },

    #[error("CIDR '{0}' has no addresses below its broadcast address")]
    DegenerateRange(String),

    #[error(
        "subnet name '{}' is shorter than the {} character wildcard prefix",
        .0,
        NAME_PREFIX_LEN
    )]
    NameTooShort(String),

    #[error("input file does not exist: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("missing input workbook argument")]
    Usage,

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<PtrGenError>,
    },

    #[error("unable to read workbook {}: {source}", .path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook {} has no worksheet", .0.display())]
    NoWorksheet(PathBuf),

    #[error("unable to read csv: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("i/o error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl PtrGenError {
    pub(crate) fn invalid_cidr(cidr: &str, reason: impl Into<String>) -> Self {
        PtrGenError::InvalidCidr {
            cidr: cidr.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach the 1-based sheet row the failure came from.
    pub fn at_row(self, row: usize) -> Self {
        PtrGenError::Row {
            row,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_context_in_message() {
        let err = PtrGenError::NameTooShort("abc".to_string()).at_row(7);
        assert_eq!(
            err.to_string(),
            "row 7: subnet name 'abc' is shorter than the 8 character wildcard prefix"
        );
    }

    #[test]
    fn test_invalid_cidr_message() {
        let err = PtrGenError::invalid_cidr("10.0.0/24", "invalid address 10.0.0");
        assert_eq!(
            err.to_string(),
            "invalid IPv4 CIDR '10.0.0/24': invalid address 10.0.0"
        );
    }
}

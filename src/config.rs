//! Run parameters.

use std::path::{Path, PathBuf};

/// Environment variable naming the log4rs configuration file.
pub const LOG_CONFIG_ENV: &str = "PTR_GENERATE_LOG_CONFIG";
/// log4rs configuration used when [`LOG_CONFIG_ENV`] is unset.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Input and output paths for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub workbook: PathBuf,
    pub outfile: PathBuf,
}

impl RunConfig {
    /// Configuration writing next to `workbook`, see [`output_path_for`].
    pub fn new(workbook: impl Into<PathBuf>) -> Self {
        let workbook = workbook.into();
        let outfile = output_path_for(&workbook);
        RunConfig { workbook, outfile }
    }
}

/// Output file for an input sheet: same path with the extension replaced by `.txt`.
pub fn output_path_for(workbook: &Path) -> PathBuf {
    workbook.with_extension("txt")
}

/// Path of the log4rs configuration, honouring [`LOG_CONFIG_ENV`].
pub fn log_config_path() -> PathBuf {
    std::env::var_os(LOG_CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("zones/subnets.xlsx")),
            PathBuf::from("zones/subnets.txt")
        );
        assert_eq!(
            output_path_for(Path::new("subnets.csv")),
            PathBuf::from("subnets.txt")
        );
        assert_eq!(
            output_path_for(Path::new("subnets")),
            PathBuf::from("subnets.txt")
        );
    }

    #[test]
    fn test_run_config_new() {
        let config = RunConfig::new("ptr.xlsx");
        assert_eq!(config.workbook, PathBuf::from("ptr.xlsx"));
        assert_eq!(config.outfile, PathBuf::from("ptr.txt"));
    }
}

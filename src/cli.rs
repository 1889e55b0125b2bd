use crate::error::PtrGenError;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Turn a subnet spreadsheet into reverse-DNS $GENERATE lines
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workbook with CIDR blocks in column A and subnet names in column B
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,
}

/// Parse arguments, mapping any failure except `--help`/`--version` to
/// [`PtrGenError::Usage`].
pub fn parse_args_from<I, T>(args: I) -> Result<Cli, PtrGenError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            log::debug!("argument error: {e}");
            PtrGenError::Usage
        }
    })
}

//! Reverse-DNS `$GENERATE` fragments from a subnet spreadsheet.
//!
//! - [`input`] - reads `(CIDR, name)` rows from the first sheet
//! - [`processing`] - expands each CIDR into per-/24 segments and PTR names
//! - [`output`] - writes the zonefile fragment

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use config::RunConfig;
pub use error::PtrGenError;

/// Convert `config.workbook` into `config.outfile`.
///
/// Every row is expanded before the output file is opened, so a failing row
/// leaves no partial output behind.
///
/// # Returns
/// * `Ok(usize)` - number of `$GENERATE` lines written
pub fn run(config: &RunConfig) -> Result<usize, PtrGenError> {
    log::info!("#Start run() {}", config.workbook.display());

    let entries = input::read_entries(&config.workbook)?;
    let expanded = processing::expand_entries(&entries)?;
    let count = output::write_zonefile(&config.outfile, &expanded)?;

    log::info!("#End run() {count} line(s)");
    Ok(count)
}

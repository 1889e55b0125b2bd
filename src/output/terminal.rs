//! Terminal output utilities.

use colored::Colorize;
use std::path::Path;

/// Message printed once the output file is in place.
pub fn done_message(outfile: &Path) -> String {
    format!(
        "{} has been assembled for copypasta fun-times. Enjoy!",
        outfile.display().to_string().green()
    )
}

/// Usage text for a missing workbook argument.
pub fn usage_message(program: &str) -> String {
    format!(
        "Usage: {program} <workbook.xlsx>\nwhere workbook.xlsx contains the PTR zones to be created\n"
    )
}

/// Prefix for fatal errors on stderr.
pub fn error_prefix() -> String {
    "ERROR".on_red().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_message_names_file() {
        colored::control::set_override(false);
        assert_eq!(
            done_message(Path::new("zones.txt")),
            "zones.txt has been assembled for copypasta fun-times. Enjoy!"
        );
    }

    #[test]
    fn test_usage_message() {
        let usage = usage_message("ptr-generate");
        assert!(usage.starts_with("Usage: ptr-generate <workbook.xlsx>\n"));
    }
}

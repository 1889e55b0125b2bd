//! `$GENERATE` zonefile fragment output.

use crate::error::PtrGenError;
use crate::models::{ExpandedEntry, NamedSegment};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// First line of every output file.
pub const BANNER: &str = "# some tasty copypasta for whichever zonefiles get these.";

/// Format a single `$GENERATE` directive.
pub fn generate_line(named: &NamedSegment) -> String {
    format!(
        "$GENERATE {low}-{high}     $    PTR    {name}",
        low = named.segment.low_fourth,
        high = named.segment.high_fourth,
        name = named.name
    )
}

/// Render the complete output text: banner, blank line, one directive per segment.
pub fn render(entries: &[ExpandedEntry]) -> String {
    let lines = entries
        .iter()
        .flat_map(|e| e.segments.iter())
        .map(generate_line)
        .join("\n");

    if lines.is_empty() {
        format!("{BANNER}\n\n")
    } else {
        format!("{BANNER}\n\n{lines}\n")
    }
}

/// Write the rendered entries to `outfile`, returning the number of directives written.
pub fn write_zonefile(outfile: &Path, entries: &[ExpandedEntry]) -> Result<usize, PtrGenError> {
    let count: usize = entries.iter().map(|e| e.segments.len()).sum();
    std::fs::write(outfile, render(entries))?;
    log::info!("Wrote {count} $GENERATE line(s) to {}", outfile.display());
    Ok(count)
}

lazy_static! {
    static ref GENERATE_RE: Regex =
        Regex::new(r"^\$GENERATE\s+(\d{1,3})-(\d{1,3})\s+\$\s+PTR\s+(\S+)\s*$")
            .expect("Invalid Regex?");
}

/// A `$GENERATE` directive read back from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateLine {
    pub low: u8,
    pub high: u8,
    pub name: String,
}

impl GenerateLine {
    /// Third octet encoded in the owner name (`a-b-c-$.` form).
    pub fn third_octet(&self) -> Option<u8> {
        self.name.split('-').nth(2)?.parse().ok()
    }
}

/// Parse a line written by [`generate_line`]. Comments, blank lines and
/// anything else return `None`.
pub fn parse_generate_line(line: &str) -> Option<GenerateLine> {
    let caps = GENERATE_RE.captures(line)?;
    Some(GenerateLine {
        low: caps[1].parse().ok()?,
        high: caps[2].parse().ok()?,
        name: caps[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Segment, SubnetEntry};
    use crate::processing::expand_entry;
    use tempfile::TempDir;

    fn named(third: u8, low: u8, high: u8, name: &str) -> NamedSegment {
        NamedSegment {
            segment: Segment {
                leading_octets: [192, 168],
                third_octet: third,
                low_fourth: low,
                high_fourth: high,
            },
            name: name.to_string(),
        }
    }

    #[test]
    fn test_generate_line_format() {
        assert_eq!(
            generate_line(&named(47, 0, 254, "192-168-47-$.example.com.")),
            "$GENERATE 0-254     $    PTR    192-168-47-$.example.com."
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), format!("{BANNER}\n\n"));
    }

    #[test]
    fn test_render_and_parse_back() {
        let entry = SubnetEntry::new(1, "10.0.0.0/22", "$-$-$-$.lab.example.org.");
        let expanded = expand_entry(&entry).unwrap();
        let text = render(std::slice::from_ref(&expanded));

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(BANNER));
        assert_eq!(lines.next(), Some(""));

        let parsed: Vec<GenerateLine> = lines.filter_map(parse_generate_line).collect();
        assert_eq!(parsed.len(), expanded.segments.len());
        for (line, named) in parsed.iter().zip(&expanded.segments) {
            assert_eq!(line.low, named.segment.low_fourth);
            assert_eq!(line.high, named.segment.high_fourth);
            assert_eq!(line.third_octet(), Some(named.segment.third_octet));
            assert_eq!(line.name, named.name);
        }
    }

    #[test]
    fn test_parse_generate_line_rejects_other_text() {
        assert_eq!(parse_generate_line(BANNER), None);
        assert_eq!(parse_generate_line(""), None);
        assert_eq!(parse_generate_line("$GENERATE 0-300 $ PTR x."), None);
        assert_eq!(
            parse_generate_line("$GENERATE 1-9 $ PTR 10-0-0-$.x."),
            Some(GenerateLine {
                low: 1,
                high: 9,
                name: "10-0-0-$.x.".to_string()
            })
        );
    }

    #[test]
    fn test_write_zonefile() {
        let temp_dir = TempDir::new().expect("Error creating temp dir");
        let outfile = temp_dir.path().join("subnets.txt");
        let entries = vec![ExpandedEntry {
            entry: SubnetEntry::new(1, "192.168.47.0/24", "$-$-$-$.example.com."),
            segments: vec![named(47, 0, 254, "192-168-47-$.example.com.")],
        }];

        let count = write_zonefile(&outfile, &entries).expect("Error writing zonefile");
        assert_eq!(count, 1);
        let text = std::fs::read_to_string(&outfile).unwrap();
        assert_eq!(
            text,
            format!("{BANNER}\n\n$GENERATE 0-254     $    PTR    192-168-47-$.example.com.\n")
        );
    }
}

//! Output formatting.
//!
//! - [`zonefile`] - `$GENERATE` text written to the output file
//! - [`terminal`] - messages for the operator

mod terminal;
mod zonefile;

pub use terminal::{done_message, error_prefix, usage_message};
pub use zonefile::{
    generate_line, parse_generate_line, render, write_zonefile, GenerateLine, BANNER,
};

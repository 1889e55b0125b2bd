//! Domain models for PTR generation.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetEntry`] - one row of the input sheet
//! - [`Segment`], [`NamedSegment`], [`ExpandedEntry`] - derived `$GENERATE` ranges

mod entry;
mod ipv4;

// Re-export public types
pub use entry::{ExpandedEntry, NamedSegment, Segment, SubnetEntry};
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH};

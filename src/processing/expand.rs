//! Range expansion.
//!
//! Splits a CIDR block into one [`Segment`] per /24 block it touches.

use crate::error::PtrGenError;
use crate::models::{Ipv4, Segment};

/// Expand a CIDR into ordered `$GENERATE` segments.
///
/// The covered range starts at the network address and stops one below the
/// broadcast address. Host bits in `cidr` are ignored.
///
/// # Errors
/// * [`PtrGenError::InvalidCidr`] - `cidr` is not IPv4 CIDR notation
/// * [`PtrGenError::DegenerateRange`] - nothing is left below the broadcast address (/32)
pub fn expand(cidr: &str) -> Result<Vec<Segment>, PtrGenError> {
    let ipv4 = Ipv4::new(cidr)?;
    let (first, last) = ipv4
        .ptr_range()
        .ok_or_else(|| PtrGenError::DegenerateRange(cidr.trim().to_string()))?;
    let first = u32::from(first);
    let last = u32::from(last);

    let first_block = first >> 8;
    let last_block = last >> 8;

    let segments: Vec<Segment> = (first_block..=last_block)
        .map(|block| {
            let [a, b, third, _] = (block << 8).to_be_bytes();
            let low_fourth = if block == first_block {
                (first & 0xff) as u8
            } else {
                0
            };
            let high_fourth = if block == last_block {
                (last & 0xff) as u8
            } else {
                255
            };
            Segment {
                leading_octets: [a, b],
                third_octet: third,
                low_fourth,
                high_fourth,
            }
        })
        .collect();

    log::trace!("expand({cidr}) -> {} segment(s)", segments.len());
    Ok(segments)
}

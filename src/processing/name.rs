//! Wildcard PTR name construction.

use crate::error::{PtrGenError, NAME_PREFIX_LEN};
use crate::models::{Ipv4, Segment};
use std::net::Ipv4Addr;

/// Prefix subnet names are expected to start with.
pub const WILDCARD_PREFIX: &str = "$-$-$-$.";

/// Build the PTR owner name for one third octet of `cidr`.
///
/// `raw_name` loses its first eight characters (the `$-$-$-$.` placeholder)
/// and gets `"{o1}-{o2}-{third_octet}-$."` in front, where `o1` and `o2` are
/// the leading octets of `cidr`. The result always ends in a single `.`
/// unless `raw_name` already ended in one.
///
/// # Examples
/// ```
/// use ptr_generate::processing::resolve_name;
/// let name = resolve_name("192.168.47.0/24", "$-$-$-$.example.com.", 47).unwrap();
/// assert_eq!(name, "192-168-47-$.example.com.");
/// ```
pub fn resolve_name(cidr: &str, raw_name: &str, third_octet: u8) -> Result<String, PtrGenError> {
    let [a, b, _, _] = Ipv4::new(cidr)?.addr.octets();
    resolve_block_name(Ipv4Addr::new(a, b, third_octet, 0), raw_name)
}

/// Build the PTR owner name for the /24 block a [`Segment`] lives in.
pub fn resolve_segment_name(segment: &Segment, raw_name: &str) -> Result<String, PtrGenError> {
    resolve_block_name(segment.block(), raw_name)
}

fn resolve_block_name(block: Ipv4Addr, raw_name: &str) -> Result<String, PtrGenError> {
    let (prefix, suffix) = split_prefix(raw_name)?;
    if prefix != WILDCARD_PREFIX {
        log::warn!(
            "subnet name '{raw_name}' does not start with '{WILDCARD_PREFIX}', stripping '{prefix}'"
        );
    }

    let [a, b, c, _] = block.octets();
    let mut name = format!("{a}-{b}-{c}-$.{suffix}");
    if !name.ends_with('.') {
        name.push('.');
    }
    Ok(name)
}

/// Split off the fixed-length placeholder, counting characters rather than bytes.
fn split_prefix(raw_name: &str) -> Result<(&str, &str), PtrGenError> {
    let cut = match raw_name.char_indices().nth(NAME_PREFIX_LEN) {
        Some((idx, _)) => idx,
        None if raw_name.chars().count() == NAME_PREFIX_LEN => raw_name.len(),
        None => return Err(PtrGenError::NameTooShort(raw_name.to_string())),
    };
    Ok(raw_name.split_at(cut))
}

//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for a parsed CIDR block along with the mask
//! arithmetic used to find its network and broadcast addresses.

use crate::error::PtrGenError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ptr_generate::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, PtrGenError> {
    if len > MAX_LENGTH {
        Err(PtrGenError::invalid_cidr(
            &format!("/{len}"),
            "network length is too long",
        ))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PtrGenError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PtrGenError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// IPv4 address with CIDR notation support.
///
/// Parsing is non-strict: host bits below the prefix are accepted and simply
/// masked off by [`Ipv4::lo`].
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address as written.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, PtrGenError> {
        let trimmed = addr_cidr.trim();
        let (addr, mask) = trimmed
            .split_once('/')
            .ok_or_else(|| PtrGenError::invalid_cidr(trimmed, "missing '/' prefix length"))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| PtrGenError::invalid_cidr(trimmed, format!("invalid address {addr}")))?;
        let mask: u8 = mask.parse().map_err(|_| {
            PtrGenError::invalid_cidr(trimmed, format!("invalid prefix length {mask}"))
        })?;
        if mask > MAX_LENGTH {
            return Err(PtrGenError::invalid_cidr(
                trimmed,
                format!("prefix length {mask} is longer than {MAX_LENGTH}"),
            ));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        // mask is validated on construction
        cut_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Range used for PTR generation: the network address up to one below
    /// the broadcast address.
    ///
    /// Returns `None` when that range is empty (a /32).
    pub fn ptr_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        let first = u32::from(self.lo());
        let last = u32::from(self.hi()).checked_sub(1)?;
        if first > last {
            None
        } else {
            Some((Ipv4Addr::from(first), Ipv4Addr::from(last)))
        }
    }
}

impl FromStr for Ipv4 {
    type Err = PtrGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

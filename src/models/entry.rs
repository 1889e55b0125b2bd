//! Records flowing from the sheet reader to the zonefile writer.

use std::net::Ipv4Addr;

/// One non-blank row of the input sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetEntry {
    /// 1-based row number in the source sheet.
    pub row: usize,
    /// CIDR block as written in column A.
    pub cidr: String,
    /// Raw subnet name from column B, including the `$-$-$-$.` prefix.
    pub name: String,
}

impl SubnetEntry {
    pub fn new(row: usize, cidr: impl Into<String>, name: impl Into<String>) -> Self {
        SubnetEntry {
            row,
            cidr: cidr.into(),
            name: name.into(),
        }
    }
}

/// A contiguous run of fourth octets inside a single /24 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    /// First two octets of the block.
    pub leading_octets: [u8; 2],
    pub third_octet: u8,
    pub low_fourth: u8,
    pub high_fourth: u8,
}

impl Segment {
    /// Base address of the /24 block, e.g. `192.168.47.0`.
    pub fn block(&self) -> Ipv4Addr {
        let [a, b] = self.leading_octets;
        Ipv4Addr::new(a, b, self.third_octet, 0)
    }

    pub fn first_address(&self) -> Ipv4Addr {
        let [a, b] = self.leading_octets;
        Ipv4Addr::new(a, b, self.third_octet, self.low_fourth)
    }

    pub fn last_address(&self) -> Ipv4Addr {
        let [a, b] = self.leading_octets;
        Ipv4Addr::new(a, b, self.third_octet, self.high_fourth)
    }
}

/// A [`Segment`] paired with the PTR owner name it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSegment {
    pub segment: Segment,
    pub name: String,
}

/// A [`SubnetEntry`] together with everything emitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedEntry {
    pub entry: SubnetEntry,
    pub segments: Vec<NamedSegment>,
}

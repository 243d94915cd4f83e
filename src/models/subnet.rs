//! Address and mask pairing.

use super::{AddressValue, SubnetMask};
use crate::processing;
use std::fmt;
use std::net::Ipv4Addr;

/// An address paired with a mask for the duration of a query.
///
/// Borrows both operands; nothing derived is stored.
#[derive(Debug, Copy, Clone)]
pub struct Subnet<'a> {
    /// Address inside the subnet.
    pub address: &'a AddressValue,
    /// Mask of the subnet.
    pub mask: &'a SubnetMask,
}

impl<'a> Subnet<'a> {
    pub fn new(address: &'a AddressValue, mask: &'a SubnetMask) -> Subnet<'a> {
        Subnet { address, mask }
    }

    pub fn is_valid(&self, strict: bool) -> bool {
        processing::is_valid(self.address, self.mask, strict)
    }

    pub fn network(&self) -> Option<Ipv4Addr> {
        processing::network(self.address, self.mask)
    }

    pub fn broadcast(&self) -> Option<Ipv4Addr> {
        processing::broadcast(self.address, self.mask)
    }

    pub fn range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        processing::range(self.address, self.mask)
    }

    pub fn strict_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        processing::strict_range(self.address, self.mask)
    }

    pub fn host_count(&self) -> Option<u32> {
        processing::host_count(self.mask)
    }

    pub fn is_subnet_address(&self) -> Option<bool> {
        processing::is_subnet_address(self.address, self.mask)
    }

    pub fn is_broadcast_address(&self) -> Option<bool> {
        processing::is_broadcast_address(self.address, self.mask)
    }

    pub fn contains(&self, candidate: &str) -> Option<bool> {
        processing::contains(self.address, self.mask, candidate)
    }
}

impl fmt::Display for Subnet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.network(), self.mask.prefix_len()) {
            (Some(net), Some(len)) => write!(f, "{net}/{len}"),
            _ => write!(f, "invalid"),
        }
    }
}

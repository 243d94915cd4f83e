//! Subnet calculus over an address and a mask.
//!
//! Every function takes both operands explicitly and returns `None` when
//! either one is invalid.

use crate::models::{block_size, broadcast_bits, network_bits, AddressValue, SubnetMask};
use std::net::Ipv4Addr;

/// Canonical address, mask and prefix length, if both operands are valid.
fn operands(address: &AddressValue, mask: &SubnetMask) -> Option<(u32, u32, u8)> {
    Some((address.value()?, mask.value()?, mask.prefix_len()?))
}

/// First and last address of the block, as u32.
fn bounds(addr: u32, mask: u32, len: u8) -> (u32, u32) {
    let lo = network_bits(addr, mask);
    let hi = lo as u64 + block_size(len) - 1;
    // hi never exceeds u32::MAX since lo has no host bits set
    (lo, hi as u32)
}

/// Network address: `address AND mask`.
pub fn network(address: &AddressValue, mask: &SubnetMask) -> Option<Ipv4Addr> {
    let (addr, mask, _) = operands(address, mask)?;
    Some(Ipv4Addr::from(network_bits(addr, mask)))
}

/// Broadcast address: `(address AND mask) OR (NOT mask)`.
pub fn broadcast(address: &AddressValue, mask: &SubnetMask) -> Option<Ipv4Addr> {
    let (addr, mask, _) = operands(address, mask)?;
    Some(Ipv4Addr::from(broadcast_bits(addr, mask)))
}

/// Inclusive address range of the subnet `address` lies in.
pub fn range(address: &AddressValue, mask: &SubnetMask) -> Option<(Ipv4Addr, Ipv4Addr)> {
    let (addr, mask, len) = operands(address, mask)?;
    let (lo, hi) = bounds(addr, mask, len);
    Some((Ipv4Addr::from(lo), Ipv4Addr::from(hi)))
}

/// Like [`range`], but `None` unless `address` is the network address.
pub fn strict_range(address: &AddressValue, mask: &SubnetMask) -> Option<(Ipv4Addr, Ipv4Addr)> {
    if !is_subnet_address(address, mask)? {
        log::debug!("strict_range: {address} is not a network address for {mask}");
        return None;
    }
    range(address, mask)
}

/// Usable hosts, excluding network and broadcast addresses.
///
/// /31 and /32 have no usable hosts and give `Some(0)`.
pub fn host_count(mask: &SubnetMask) -> Option<u32> {
    let mask = mask.value()?;
    Some((!mask).saturating_sub(1))
}

/// True if `address` is the network address of its subnet.
pub fn is_subnet_address(address: &AddressValue, mask: &SubnetMask) -> Option<bool> {
    let (addr, mask, _) = operands(address, mask)?;
    Some(network_bits(addr, mask) == addr)
}

/// True if `address` is the broadcast address of its subnet.
pub fn is_broadcast_address(address: &AddressValue, mask: &SubnetMask) -> Option<bool> {
    let (addr, mask, _) = operands(address, mask)?;
    Some(broadcast_bits(addr, mask) == addr)
}

/// Check whether `candidate` lies in the subnet of `address`/`mask`.
///
/// `candidate` may be written in any address format; unrecognized text gives
/// `None`.
pub fn contains(address: &AddressValue, mask: &SubnetMask, candidate: &str) -> Option<bool> {
    contains_address(address, mask, &AddressValue::new(candidate))
}

/// [`contains`] for an already parsed candidate.
pub fn contains_address(
    address: &AddressValue,
    mask: &SubnetMask,
    candidate: &AddressValue,
) -> Option<bool> {
    let (addr, mask, len) = operands(address, mask)?;
    let candidate = candidate.value()?;
    let (lo, hi) = bounds(addr, mask, len);
    Some(lo <= candidate && candidate <= hi)
}

/// Validity of an address/mask pair.
///
/// Non-strict: both parsed and the mask is contiguous. Strict: additionally
/// the address must equal its own network address.
pub fn is_valid(address: &AddressValue, mask: &SubnetMask, strict: bool) -> bool {
    match is_subnet_address(address, mask) {
        Some(is_network) => !strict || is_network,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(addr: &str, mask: &str) -> (AddressValue, SubnetMask) {
        (AddressValue::new(addr), SubnetMask::new(mask))
    }

    #[test]
    fn test_network_and_broadcast() {
        let (a, m) = pair("192.168.1.10", "255.255.255.0");
        assert_eq!(network(&a, &m).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(broadcast(&a, &m).unwrap(), Ipv4Addr::new(192, 168, 1, 255));

        let (a, m) = pair("10.2.3.4", "/16");
        assert_eq!(network(&a, &m).unwrap(), Ipv4Addr::new(10, 2, 0, 0));
        assert_eq!(broadcast(&a, &m).unwrap(), Ipv4Addr::new(10, 2, 255, 255));

        let (a, m) = pair("192.168.1.0", "/8");
        assert_eq!(broadcast(&a, &m).unwrap(), Ipv4Addr::new(192, 255, 255, 255));
    }

    #[test]
    fn test_range() {
        let (a, m) = pair("192.168.1.10", "255.255.255.0");
        assert_eq!(
            range(&a, &m).unwrap(),
            (Ipv4Addr::new(192, 168, 1, 0), Ipv4Addr::new(192, 168, 1, 255))
        );
        assert_eq!(strict_range(&a, &m), None);

        let (a, m) = pair("192.168.1.0", "/24");
        assert_eq!(
            strict_range(&a, &m).unwrap(),
            (Ipv4Addr::new(192, 168, 1, 0), Ipv4Addr::new(192, 168, 1, 255))
        );
    }

    #[test]
    fn test_range_edges() {
        let (a, m) = pair("255.255.255.255", "/24");
        assert_eq!(
            range(&a, &m).unwrap(),
            (Ipv4Addr::new(255, 255, 255, 0), Ipv4Addr::new(255, 255, 255, 255))
        );
        let (a, m) = pair("10.1.2.3", "0.0.0.0");
        assert_eq!(
            range(&a, &m).unwrap(),
            (Ipv4Addr::new(0, 0, 0, 0), Ipv4Addr::new(255, 255, 255, 255))
        );
        let (a, m) = pair("10.1.2.3", "/32");
        assert_eq!(
            range(&a, &m).unwrap(),
            (Ipv4Addr::new(10, 1, 2, 3), Ipv4Addr::new(10, 1, 2, 3))
        );
    }

    #[test]
    fn test_host_count() {
        assert_eq!(host_count(&SubnetMask::new("/24")), Some(254));
        assert_eq!(host_count(&SubnetMask::new("/30")), Some(2));
        assert_eq!(host_count(&SubnetMask::new("/31")), Some(0));
        assert_eq!(host_count(&SubnetMask::new("/32")), Some(0));
        assert_eq!(host_count(&SubnetMask::new("/8")), Some(16777214));
        assert_eq!(host_count(&SubnetMask::new("0.0.0.0")), Some(4294967294));
        assert_eq!(host_count(&SubnetMask::new("255.255.255.1")), None);
    }

    #[test]
    fn test_contains() {
        let (a, m) = pair("192.168.1.10", "255.255.255.0");
        assert_eq!(contains(&a, &m, "192.168.1.200"), Some(true));
        assert_eq!(contains(&a, &m, "192.168.1.0"), Some(true));
        assert_eq!(contains(&a, &m, "192.168.1.255"), Some(true));
        assert_eq!(contains(&a, &m, "192.168.2.1"), Some(false));
        assert_eq!(contains(&a, &m, "192.168.0.255"), Some(false));
        assert_eq!(contains(&a, &m, "0xC0A801C8"), Some(true));
        assert_eq!(contains(&a, &m, "192.168.1"), None);
    }

    #[test]
    fn test_subnet_and_broadcast_checks() {
        let (a, m) = pair("192.168.1.0", "/24");
        assert_eq!(is_subnet_address(&a, &m), Some(true));
        assert_eq!(is_broadcast_address(&a, &m), Some(false));

        let (a, m) = pair("192.168.1.255", "/24");
        assert_eq!(is_subnet_address(&a, &m), Some(false));
        assert_eq!(is_broadcast_address(&a, &m), Some(true));

        let (a, m) = pair("192.168.1.255", "/33");
        assert_eq!(is_subnet_address(&a, &m), None);
        assert_eq!(is_broadcast_address(&a, &m), None);
    }

    #[test]
    fn test_is_valid() {
        let (a, m) = pair("192.168.1.10", "/24");
        assert!(is_valid(&a, &m, false));
        assert!(!is_valid(&a, &m, true));

        let (a, m) = pair("192.168.1.0", "/24");
        assert!(is_valid(&a, &m, true));

        let (a, m) = pair("192.168.1.300", "/24");
        assert!(!is_valid(&a, &m, false));

        let (a, m) = pair("192.168.1.0", "255.255.0.255");
        assert!(!is_valid(&a, &m, false));
    }

    #[test]
    fn test_invalid_operands_are_unavailable() {
        let (a, m) = pair("nope", "/24");
        assert_eq!(network(&a, &m), None);
        assert_eq!(broadcast(&a, &m), None);
        assert_eq!(range(&a, &m), None);
        assert_eq!(contains(&a, &m, "10.0.0.1"), None);
    }
}

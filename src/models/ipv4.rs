//! Bit level helpers on canonical IPv4 values.
//!
//! All values are plain `u32` in network (big-endian) bit order.

use std::error::Error;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_toolkit::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Check that `value` is leading ones followed by trailing zeros.
///
/// Both `0.0.0.0` and `255.255.255.255` qualify.
pub fn is_contiguous_mask(value: u32) -> bool {
    // Inverting a prefix mask gives 2^n - 1, so adding one clears every bit.
    (!value).wrapping_add(1) & !value == 0
}

/// Prefix length of a contiguous mask, `None` otherwise.
pub fn prefix_len(mask: u32) -> Option<u8> {
    is_contiguous_mask(mask).then(|| mask.leading_ones() as u8)
}

/// Network address bits: `addr AND mask`.
pub fn network_bits(addr: u32, mask: u32) -> u32 {
    addr & mask
}

/// Broadcast address bits: `(addr AND mask) OR (NOT mask)`.
pub fn broadcast_bits(addr: u32, mask: u32) -> u32 {
    network_bits(addr, mask) | !mask
}

/// Number of addresses in a block with prefix `len`, as u64 so /0 fits.
pub fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Calculate the minimum mask for an IP address based on trailing zeros.
pub fn lo_mask(addr: u32) -> u8 {
    MAX_LENGTH - addr.trailing_zeros() as u8
}

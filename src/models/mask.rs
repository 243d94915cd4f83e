//! IPv4 subnet mask.

use super::{is_contiguous_mask, prefix_len, AddressValue, TextFormat};
use crate::codec::{render, render_named, unify, Context};
use std::fmt;
use std::net::Ipv4Addr;

/// Subnet mask parsed from any address format or `/n` notation.
///
/// Holds its own canonical value, independent of any address it is later
/// paired with. Valid only when the text parsed AND the bits form a
/// contiguous prefix mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetMask {
    value: Option<u32>,
    format: Option<TextFormat>,
}

impl SubnetMask {
    pub fn new(text: &str) -> SubnetMask {
        let Some((value, format)) = unify(text, Context::Mask) else {
            log::debug!("SubnetMask::new({text:?}) unrecognized format");
            return SubnetMask::invalid(None);
        };
        if !is_contiguous_mask(value) {
            log::debug!("SubnetMask::new({text:?}) not a contiguous mask: {value:032b}");
            return SubnetMask::invalid(Some(format));
        }
        SubnetMask {
            value: Some(value),
            format: Some(format),
        }
    }

    fn invalid(format: Option<TextFormat>) -> SubnetMask {
        SubnetMask {
            value: None,
            format,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Validity of this mask paired with `address`.
    ///
    /// Non-strict: both must be valid. Strict: the address must also be the
    /// network address of this mask.
    pub fn is_valid_for(&self, address: &AddressValue, strict: bool) -> bool {
        crate::processing::is_valid(address, self, strict)
    }

    /// Format the input was detected as.
    ///
    /// Set for non-contiguous masks too, which failed only the bit check.
    pub fn format(&self) -> Option<TextFormat> {
        self.format
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn ipv4_addr(&self) -> Option<Ipv4Addr> {
        self.value.map(Ipv4Addr::from)
    }

    /// Count of leading one bits.
    pub fn prefix_len(&self) -> Option<u8> {
        prefix_len(self.value?)
    }

    /// Number of addresses the mask covers, including network and broadcast.
    pub fn block_size(&self) -> Option<u64> {
        self.prefix_len().map(super::block_size)
    }

    pub fn render(&self, format: TextFormat) -> Option<String> {
        render(self.value?, format)
    }

    pub fn render_named(&self, name: &str) -> Option<String> {
        render_named(self.value?, name)
    }

    pub fn human_readable(&self) -> Option<String> {
        self.render(TextFormat::HumanReadable)
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.prefix_len() {
            Some(len) => write!(f, "/{len}"),
            None => write!(f, "invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_len() {
        assert_eq!(SubnetMask::new("255.255.255.0").prefix_len(), Some(24));
        assert_eq!(SubnetMask::new("/24").prefix_len(), Some(24));
        assert_eq!(SubnetMask::new("0xFFFF0000").prefix_len(), Some(16));
        assert_eq!(SubnetMask::new("4294967040").prefix_len(), Some(24));
        assert_eq!(SubnetMask::new("-256").prefix_len(), Some(24));
        assert_eq!(SubnetMask::new("0377.0377.0377.0200").prefix_len(), Some(25));
        assert_eq!(
            SubnetMask::new("11111111111111111111111111111100").prefix_len(),
            Some(30)
        );
        assert_eq!(SubnetMask::new("255.255.255.255").prefix_len(), Some(32));
        assert_eq!(SubnetMask::new("0.0.0.0").prefix_len(), Some(0));
    }

    #[test]
    fn test_non_contiguous_mask_is_invalid() {
        let mask = SubnetMask::new("255.255.255.1");
        assert!(!mask.is_valid());
        assert_eq!(mask.format(), Some(TextFormat::HumanReadable));
        assert_eq!(mask.prefix_len(), None);
        assert_eq!(mask.human_readable(), None);

        assert!(!SubnetMask::new("255.0.255.0").is_valid());
        assert!(!SubnetMask::new("0.0.0.255").is_valid());
    }

    #[test]
    fn test_unrecognized_mask_is_invalid() {
        let mask = SubnetMask::new("/33");
        assert!(!mask.is_valid());
        assert_eq!(mask.format(), None);
        assert!(!SubnetMask::new("/0").is_valid());
        assert!(!SubnetMask::new("mask").is_valid());
    }

    #[test]
    fn test_render() {
        let mask = SubnetMask::new("/20");
        assert_eq!(mask.human_readable().unwrap(), "255.255.240.0");
        assert_eq!(mask.render(TextFormat::Cidr).unwrap(), "20");
        assert_eq!(mask.render(TextFormat::Hex).unwrap(), "0xFFFFF000");
        assert_eq!(mask.render_named("HexDotted").unwrap(), "0xFF.0xFF.0xF0.0x00");
        assert_eq!(mask.render_named("Nope"), None);
        assert_eq!(mask.to_string(), "/20");
    }

    #[test]
    fn test_block_size() {
        assert_eq!(SubnetMask::new("/24").block_size(), Some(256));
        assert_eq!(SubnetMask::new("/32").block_size(), Some(1));
        assert_eq!(SubnetMask::new("0.0.0.0").block_size(), Some(1 << 32));
    }
}

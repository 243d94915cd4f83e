//! IPv4 address and subnet mask toolkit.
//!
//! Parses addresses and masks written in several encodings, normalizes them
//! to a canonical `u32`, converts between encodings and derives subnet facts.
//!
//! ```
//! use ipv4_toolkit::{parse_address, parse_mask, models::Subnet};
//!
//! let address = parse_address("0xC0A8010A");
//! let mask = parse_mask("/24");
//! let subnet = Subnet::new(&address, &mask);
//! assert_eq!(subnet.broadcast().unwrap().to_string(), "192.168.1.255");
//! assert_eq!(subnet.contains("192.168.1.200"), Some(true));
//! ```

pub mod batch;
pub mod cli;
pub mod codec;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use models::{AddressValue, SubnetMask};

/// Parse an address in any supported format.
///
/// Never fails, unrecognized text gives an invalid [`AddressValue`].
pub fn parse_address(text: &str) -> AddressValue {
    AddressValue::new(text)
}

/// Parse a subnet mask in any supported format or `/n` notation.
///
/// Never fails, unrecognized or non-contiguous masks are invalid.
pub fn parse_mask(text: &str) -> SubnetMask {
    SubnetMask::new(text)
}

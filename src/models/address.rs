//! IPv4 address parsed from any supported encoding.

use super::{lo_mask, TextFormat};
use crate::codec::{render, render_named, unify, Context};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Canonical IPv4 address value.
///
/// Construction never fails: unrecognized text gives an invalid value and
/// every derived query on it returns `None`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AddressValue {
    value: Option<u32>,
    format: Option<TextFormat>,
}

impl AddressValue {
    /// Parse `text` in any detectable address format.
    pub fn new(text: &str) -> AddressValue {
        match unify(text, Context::Address) {
            Some((value, format)) => AddressValue {
                value: Some(value),
                format: Some(format),
            },
            None => {
                log::debug!("AddressValue::new({text:?}) unrecognized format");
                AddressValue::invalid()
            }
        }
    }

    /// An address that did not parse.
    pub fn invalid() -> AddressValue {
        AddressValue {
            value: None,
            format: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Format the input text was detected as.
    pub fn format(&self) -> Option<TextFormat> {
        self.format
    }

    /// Canonical 32-bit value.
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn ipv4_addr(&self) -> Option<Ipv4Addr> {
        self.value.map(Ipv4Addr::from)
    }

    /// Render the address in `format`.
    pub fn render(&self, format: TextFormat) -> Option<String> {
        render(self.value?, format)
    }

    /// Render the address in the format called `name`, e.g. `"HexDotted"`.
    pub fn render_named(&self, name: &str) -> Option<String> {
        render_named(self.value?, name)
    }

    /// Shorthand for `render(TextFormat::HumanReadable)`.
    pub fn human_readable(&self) -> Option<String> {
        self.render(TextFormat::HumanReadable)
    }

    /// Host bits of the largest CIDR block this address can be the start of.
    ///
    /// `0.0.0.0` fits a /0 block (32 bits), an odd address only fits a /32
    /// (0 bits).
    pub fn largest_fitting_block_bits(&self) -> Option<u8> {
        self.value.map(|v| v.trailing_zeros() as u8)
    }

    /// Smallest prefix length this address can be a network address for.
    pub fn min_prefix_len(&self) -> Option<u8> {
        self.value.map(lo_mask)
    }
}

impl From<Ipv4Addr> for AddressValue {
    fn from(addr: Ipv4Addr) -> Self {
        AddressValue {
            value: Some(u32::from(addr)),
            format: Some(TextFormat::HumanReadable),
        }
    }
}

impl fmt::Display for AddressValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.ipv4_addr() {
            Some(addr) => write!(f, "{addr}"),
            None => write!(f, "invalid"),
        }
    }
}

impl Serialize for AddressValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self.human_readable() {
            Some(addr) => serializer.serialize_str(&addr),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for AddressValue {
    fn deserialize<D>(deserializer: D) -> Result<AddressValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        // null is how an invalid address serializes
        let Some(s) = Option::<String>::deserialize(deserializer)? else {
            return Ok(AddressValue::invalid());
        };
        let addr = AddressValue::new(&s);
        if !addr.is_valid() {
            return Err(de::Error::custom(format!("invalid IP address: {s}")));
        }
        Ok(addr)
    }
}

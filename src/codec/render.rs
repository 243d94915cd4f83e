//! Canonical `u32` to text conversion.

use crate::models::{prefix_len, TextFormat};
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Render `value` in the requested format.
///
/// Only `Cidr` can fail, for values that are not a contiguous mask.
pub fn render(value: u32, format: TextFormat) -> Option<String> {
    let octets = value.to_be_bytes();
    let text = match format {
        TextFormat::HumanReadable => Ipv4Addr::from(value).to_string(),
        TextFormat::Hex => format!("0x{value:08X}"),
        TextFormat::HexDotted => octets.iter().map(|o| format!("0x{o:02X}")).join("."),
        TextFormat::Oct => octets.iter().map(|o| format!("{o:04o}")).join("."),
        TextFormat::Long => value.to_string(),
        TextFormat::Bin => format!("{value:032b}"),
        TextFormat::Cidr => prefix_len(value)?.to_string(),
    };
    Some(text)
}

/// Render `value` in the format called `name`.
///
/// Unknown names resolve to `None`.
pub fn render_named(value: u32, name: &str) -> Option<String> {
    let format = TextFormat::from_name(name);
    if format.is_none() {
        log::debug!("render_named: unsupported format {name:?}");
    }
    render(value, format?)
}

//! Text to canonical `u32` normalization.

use super::detect::{detect, parse_long, Context};
use crate::models::{get_cidr_mask, TextFormat};
use std::net::Ipv4Addr;

/// Detect the format of `text` and normalize it to its canonical value.
///
/// Returns `None` when no grammar matches.
pub fn unify(text: &str, context: Context) -> Option<(u32, TextFormat)> {
    let format = detect(text, context)?;
    let value = unify_as(text, format)?;
    Some((value, format))
}

/// Normalize `text` assuming it is written in `format`.
pub fn unify_as(text: &str, format: TextFormat) -> Option<u32> {
    match format {
        TextFormat::HumanReadable => text.parse::<Ipv4Addr>().ok().map(u32::from),
        TextFormat::Hex | TextFormat::HexDotted => {
            let digits = text.to_ascii_lowercase().replace("0x", "").replace('.', "");
            u32::from_str_radix(&digits, 16).ok()
        }
        TextFormat::Oct => {
            let octets = text
                .split('.')
                .map(|g| u8::from_str_radix(g, 8).ok())
                .collect::<Option<Vec<u8>>>()?;
            let octets: [u8; 4] = octets.try_into().ok()?;
            Some(u32::from_be_bytes(octets))
        }
        TextFormat::Bin => u32::from_str_radix(text, 2).ok(),
        // Signed input wraps around, -1 becomes 255.255.255.255
        TextFormat::Long => parse_long(text).map(|v| v.rem_euclid(1 << 32) as u32),
        TextFormat::Cidr => {
            let len: u8 = text.strip_prefix('/')?.parse().ok()?;
            get_cidr_mask(len).ok()
        }
    }
}

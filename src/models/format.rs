//! Textual encodings an IPv4 address or mask can be written in.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Supported textual encodings.
///
/// `HexDotted` is only produced by rendering, it is never detected on input.
/// `Cidr` is only detected when parsing a mask.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextFormat {
    /// Dotted quad, e.g. `192.168.1.10`.
    HumanReadable,
    /// `0xC0A8010A` or `0xC0.0xA8.0x01.0x0A` on input, `0xC0A8010A` on output.
    Hex,
    /// `0xC0.0xA8.0x01.0x0A`.
    HexDotted,
    /// `0300.0250.0001.0012`.
    Oct,
    /// 32 character base-2 string.
    Bin,
    /// Decimal integer, signed input wraps modulo 2^32.
    Long,
    /// Prefix length, `/24` on input, `24` on output.
    Cidr,
}

impl TextFormat {
    /// Every format, in the order reports list them.
    pub const ALL: [TextFormat; 7] = [
        TextFormat::HumanReadable,
        TextFormat::Hex,
        TextFormat::HexDotted,
        TextFormat::Oct,
        TextFormat::Bin,
        TextFormat::Long,
        TextFormat::Cidr,
    ];

    /// Canonical name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            TextFormat::HumanReadable => "HumanReadable",
            TextFormat::Hex => "Hex",
            TextFormat::HexDotted => "HexDotted",
            TextFormat::Oct => "Oct",
            TextFormat::Bin => "Bin",
            TextFormat::Long => "Long",
            TextFormat::Cidr => "Cidr",
        }
    }

    /// Look up a format by name, ignoring ASCII case.
    ///
    /// Unknown names resolve to `None`.
    pub fn from_name(name: &str) -> Option<TextFormat> {
        TextFormat::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TextFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextFormat::from_name(s).ok_or_else(|| format!("Unknown format: {s}").into())
    }
}

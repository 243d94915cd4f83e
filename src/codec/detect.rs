//! Format detection.
//!
//! Classifies raw text against the supported encodings in a fixed priority
//! order. The first grammar that matches wins.

use crate::models::TextFormat;
use lazy_static::lazy_static;
use regex::Regex;

/// Lower bound (exclusive) accepted for [`TextFormat::Long`] input.
pub const LONG_MIN_EXCLUSIVE: i64 = -2_147_483_649;
/// Upper bound (exclusive) accepted for [`TextFormat::Long`] input.
pub const LONG_MAX_EXCLUSIVE: i64 = 4_294_967_296;

/// Largest value a single octal group may hold (`0377`).
const OCT_GROUP_MAX: u32 = 0o377;

/// Whether text is parsed as an address or as a mask.
///
/// Only masks accept [`TextFormat::Cidr`] input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Context {
    Address,
    Mask,
}

lazy_static! {
    static ref RE_HUMAN_READABLE: Regex = Regex::new(
        r"^(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])){3}$"
    )
    .expect("Invalid Regex?");
    static ref RE_HEX: Regex =
        Regex::new(r"(?i)^(0x[0-9a-f]{8}|0x[0-9a-f]{2}(\.0x[0-9a-f]{2}){3})$")
            .expect("Invalid Regex?");
    static ref RE_OCT: Regex = Regex::new(r"^[0-7]{4}(\.[0-7]{4}){3}$").expect("Invalid Regex?");
    static ref RE_BIN: Regex = Regex::new(r"^[01]{32}$").expect("Invalid Regex?");
    static ref RE_LONG: Regex = Regex::new(r"^-?[0-9]+$").expect("Invalid Regex?");
    static ref RE_CIDR: Regex = Regex::new(r"^/([1-9]|[12][0-9]|3[0-2])$").expect("Invalid Regex?");
}

/// Detect the format of `text`.
///
/// Grammars are tried in order: `HumanReadable`, `Hex`, `Oct`, `Bin`, `Long`
/// and, in mask context only, `Cidr`.
pub fn detect(text: &str, context: Context) -> Option<TextFormat> {
    let format = DETECT_ORDER
        .iter()
        .filter(|f| **f != TextFormat::Cidr || context == Context::Mask)
        .copied()
        .find(|f| matches_format(text, *f));
    log::trace!("detect({text:?}, {context:?}) -> {format:?}");
    format
}

/// Priority order used by [`detect`].
const DETECT_ORDER: [TextFormat; 6] = [
    TextFormat::HumanReadable,
    TextFormat::Hex,
    TextFormat::Oct,
    TextFormat::Bin,
    TextFormat::Long,
    TextFormat::Cidr,
];

/// Check `text` against the grammar of a single format.
///
/// `HexDotted` is never matched, it is a render target only.
pub fn matches_format(text: &str, format: TextFormat) -> bool {
    match format {
        TextFormat::HumanReadable => RE_HUMAN_READABLE.is_match(text),
        TextFormat::Hex => (10..=19).contains(&text.len()) && RE_HEX.is_match(text),
        TextFormat::HexDotted => false,
        TextFormat::Oct => is_oct(text),
        TextFormat::Bin => RE_BIN.is_match(text) && text.contains('1'),
        TextFormat::Long => parse_long(text).is_some(),
        TextFormat::Cidr => RE_CIDR.is_match(text),
    }
}

/// Parse `text` as a signed integer inside the accepted `Long` bounds.
pub(crate) fn parse_long(text: &str) -> Option<i64> {
    if !RE_LONG.is_match(text) {
        return None;
    }
    // Digit strings too long for i64 are far outside the bounds anyway.
    let value: i64 = text.parse().ok()?;
    (value > LONG_MIN_EXCLUSIVE && value < LONG_MAX_EXCLUSIVE).then_some(value)
}

fn is_oct(text: &str) -> bool {
    RE_OCT.is_match(text)
        && text
            .split('.')
            .all(|g| u32::from_str_radix(g, 8).map_or(false, |v| v <= OCT_GROUP_MAX))
}

//! Domain models for IPv4 values.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`TextFormat`] - Textual encodings of an address or mask
//! - [`AddressValue`] - IPv4 address parsed from any encoding
//! - [`SubnetMask`] - Contiguous subnet mask with prefix length
//! - [`Subnet`] - Borrowed address and mask pair for subnet queries

mod address;
mod format;
mod ipv4;
mod mask;
mod subnet;

// Re-export public types
pub use address::AddressValue;
pub use format::TextFormat;
pub use ipv4::{
    block_size, broadcast_bits, get_cidr_mask, is_contiguous_mask, lo_mask, network_bits,
    prefix_len, MAX_LENGTH,
};
pub use mask::SubnetMask;
pub use subnet::Subnet;

//! Subnet calculations.
//!
//! - [`calculator`] - Network, broadcast, range, host count and membership
//!   queries over an address and a mask

mod calculator;

// Re-export public functions
pub use calculator::{
    broadcast, contains, contains_address, host_count, is_broadcast_address, is_subnet_address,
    is_valid, network, range, strict_range,
};

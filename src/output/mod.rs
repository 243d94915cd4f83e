//! Output formatting for reports.
//!
//! This module handles building and printing query results:
//! - [`report`] - Report data built from the core types
//! - [`terminal`] - Terminal output with colors
//! - [`json`] - JSON output

mod json;
mod report;
mod terminal;

pub use json::{print_json, reports_to_json};
pub use report::{
    AddressReport, MaskReport, Membership, Rendering, Report, SubnetFacts, ValueReport,
};
pub use terminal::{format_field, format_report, print_report};

//! Report rows built from parsed addresses and masks.
//!
//! Plain data shared by terminal and JSON output.

use crate::models::{AddressValue, Subnet, SubnetMask, TextFormat};
use crate::processing;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// A value rendered in one format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rendering {
    pub format: TextFormat,
    /// `None` when the value has no rendering in this format.
    pub text: Option<String>,
}

/// Everything known about a single parsed value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValueReport {
    /// Text as given.
    pub input: String,
    pub valid: bool,
    /// Detected input format.
    pub format: Option<TextFormat>,
    pub renderings: Vec<Rendering>,
}

/// Address specific facts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddressReport {
    #[serde(flatten)]
    pub value: ValueReport,
    /// Dotted quad of the parsed address, `null` when invalid.
    pub canonical: AddressValue,
    pub largest_fitting_block_bits: Option<u8>,
    pub min_prefix_len: Option<u8>,
}

/// Mask specific facts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MaskReport {
    #[serde(flatten)]
    pub value: ValueReport,
    pub prefix_len: Option<u8>,
}

/// Membership check of one candidate address.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Membership {
    pub candidate: String,
    /// `None` when the candidate or the subnet is invalid.
    pub contained: Option<bool>,
}

/// Subnet facts derived from an address and a mask.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubnetFacts {
    pub valid: bool,
    pub strict_valid: bool,
    pub network: Option<Ipv4Addr>,
    pub broadcast: Option<Ipv4Addr>,
    pub range: Option<(Ipv4Addr, Ipv4Addr)>,
    pub host_count: Option<u32>,
    /// Addresses in the block, network and broadcast included.
    pub block_size: Option<u64>,
    pub is_subnet_address: Option<bool>,
    pub is_broadcast_address: Option<bool>,
    pub contains: Vec<Membership>,
}

/// Full report of one query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub address: AddressReport,
    pub mask: Option<MaskReport>,
    pub subnet: Option<SubnetFacts>,
}

fn renderings(render: impl Fn(TextFormat) -> Option<String>, formats: &[TextFormat]) -> Vec<Rendering> {
    formats
        .iter()
        .map(|f| Rendering {
            format: *f,
            text: render(*f),
        })
        .collect()
}

impl AddressReport {
    pub fn new(input: &str, address: &AddressValue, formats: &[TextFormat]) -> AddressReport {
        AddressReport {
            value: ValueReport {
                input: input.to_string(),
                valid: address.is_valid(),
                format: address.format(),
                renderings: renderings(|f| address.render(f), formats),
            },
            canonical: *address,
            largest_fitting_block_bits: address.largest_fitting_block_bits(),
            min_prefix_len: address.min_prefix_len(),
        }
    }
}

impl MaskReport {
    pub fn new(input: &str, mask: &SubnetMask, formats: &[TextFormat]) -> MaskReport {
        MaskReport {
            value: ValueReport {
                input: input.to_string(),
                valid: mask.is_valid(),
                format: mask.format(),
                renderings: renderings(|f| mask.render(f), formats),
            },
            prefix_len: mask.prefix_len(),
        }
    }
}

impl SubnetFacts {
    pub fn new(subnet: &Subnet, candidates: &[String]) -> SubnetFacts {
        SubnetFacts {
            valid: subnet.is_valid(false),
            strict_valid: subnet.is_valid(true),
            network: subnet.network(),
            broadcast: subnet.broadcast(),
            range: subnet.range(),
            host_count: subnet.host_count(),
            block_size: subnet.mask.block_size(),
            is_subnet_address: subnet.is_subnet_address(),
            is_broadcast_address: subnet.is_broadcast_address(),
            contains: candidates
                .iter()
                .map(|c| Membership {
                    candidate: c.clone(),
                    contained: subnet.contains(c),
                })
                .collect(),
        }
    }
}

impl Report {
    /// Parse `address` and optional `mask`, and derive every fact about them.
    pub fn build(
        address: &str,
        mask: Option<&str>,
        candidates: &[String],
        formats: &[TextFormat],
    ) -> Report {
        let address_value = AddressValue::new(address);
        let address_report = AddressReport::new(address, &address_value, formats);

        let Some(mask) = mask else {
            return Report {
                address: address_report,
                mask: None,
                subnet: None,
            };
        };

        let mask_value = SubnetMask::new(mask);
        let subnet = Subnet::new(&address_value, &mask_value);
        log::debug!("Report::build subnet={subnet}");
        if !processing::is_valid(&address_value, &mask_value, false) {
            log::info!("Invalid address/mask pair: {address:?} {mask:?}");
        }

        Report {
            address: address_report,
            mask: Some(MaskReport::new(mask, &mask_value, formats)),
            subnet: Some(SubnetFacts::new(&subnet, candidates)),
        }
    }
}

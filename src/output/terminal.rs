//! Terminal output utilities.
//!
//! Prints [`Report`]s as aligned, colored key/value lines.

use super::report::{Report, ValueReport};
use colored::Colorize;

/// Width of the label column.
const LABEL_WIDTH: usize = 22;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Display text for an optional value, `-` when unavailable.
fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn line(label: &str, value: String) -> String {
    format!("{label:>width$}: {value}", width = LABEL_WIDTH)
}

fn value_lines(title: &str, report: &ValueReport) -> Vec<String> {
    let status = if report.valid {
        "valid".green()
    } else {
        "invalid".red()
    };
    let mut lines = vec![format!(
        "{title} {input} [{status}] format={format}",
        title = title.bold(),
        input = format!("\"{}\"", report.input),
        format = or_dash(report.format),
    )];
    lines.extend(
        report
            .renderings
            .iter()
            .map(|r| line(r.format.name(), or_dash(r.text.as_ref()))),
    );
    lines
}

/// Render a report as terminal lines.
pub fn format_report(report: &Report) -> Vec<String> {
    let mut lines = value_lines("ADDRESS", &report.address.value);
    lines.push(line(
        "largest block bits",
        or_dash(report.address.largest_fitting_block_bits),
    ));
    lines.push(line("min prefix", or_dash(report.address.min_prefix_len)));

    if let Some(mask) = &report.mask {
        lines.extend(value_lines("MASK", &mask.value));
        lines.push(line("prefix length", or_dash(mask.prefix_len)));
    }

    if let Some(facts) = &report.subnet {
        let status = match (facts.valid, facts.strict_valid) {
            (true, true) => "valid (network address)".green(),
            (true, false) => "valid (host address)".yellow(),
            _ => "invalid".red(),
        };
        lines.push(format!("{} [{status}]", "SUBNET".bold()));
        lines.push(line("network", or_dash(facts.network)));
        lines.push(line("broadcast", or_dash(facts.broadcast)));
        lines.push(line(
            "range",
            or_dash(facts.range.map(|(lo, hi)| format!("{lo} - {hi}"))),
        ));
        lines.push(line("hosts", or_dash(facts.host_count)));
        lines.push(line("block size", or_dash(facts.block_size)));
        lines.push(line("is network address", or_dash(facts.is_subnet_address)));
        lines.push(line("is broadcast address", or_dash(facts.is_broadcast_address)));
        // candidates quoted and right-aligned to the longest one, plus quotes
        let width = facts.contains.iter().map(|m| m.candidate.len() + 2).max().unwrap_or(0);
        for m in &facts.contains {
            let contained = match m.contained {
                Some(true) => "yes".green(),
                Some(false) => "no".red(),
                None => "unavailable".yellow(),
            };
            lines.push(line(
                "contains",
                format!("{} {contained}", format_field(&m.candidate, width)),
            ));
        }
    }
    lines
}

/// Print a report to stdout.
pub fn print_report(report: &Report) {
    for l in format_report(report) {
        println!("{l}");
    }
}

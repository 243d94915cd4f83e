//! JSON output of reports.

use super::report::Report;
use std::error::Error;

/// Serialize reports as a pretty printed JSON array.
pub fn reports_to_json(reports: &[Report]) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(reports).map_err(|e| format!("Error serializing JSON: {e}").into())
}

/// Print reports as JSON to stdout.
pub fn print_json(reports: &[Report]) -> Result<(), Box<dyn Error>> {
    let json = reports_to_json(reports)?;
    log::debug!("print_json() {} reports, {} bytes", reports.len(), json.len());
    println!("{json}");
    Ok(())
}

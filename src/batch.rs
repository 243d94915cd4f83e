//! Batch queries read from a JSON file.

use crate::models::TextFormat;
use crate::output::Report;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// One query of a batch file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Query {
    /// Address in any supported format.
    pub address: String,
    /// Optional mask in any supported format or `/n`.
    #[serde(default)]
    pub mask: Option<String>,
    /// Addresses to test for membership in the subnet.
    #[serde(default)]
    pub contains: Vec<String>,
}

impl Query {
    pub fn run(&self, formats: &[TextFormat]) -> Report {
        Report::build(&self.address, self.mask.as_deref(), &self.contains, formats)
    }
}

/// Parse a JSON array of queries.
///
/// Errors name the JSON path that failed to parse.
pub fn parse_queries(json: &str) -> Result<Vec<Query>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let queries: Vec<Query> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing queries: path={} error={}", e.path(), e))?;
    Ok(queries)
}

/// Read queries from the batch file at `path`.
///
/// # Returns
/// * `Ok(Vec<Query>)` - The queries in file order
/// * `Err` - If the file does not exist or is not a JSON array of queries
pub fn read_queries(path: &str) -> Result<Vec<Query>, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Batch file does not exist: {path}").into());
    }
    log::info!("Reading queries from batch file: {path}");
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading batch file {path}: {e}"))?;
    let queries = parse_queries(&json)?;
    log::info!("Read {} queries from {path}", queries.len());
    Ok(queries)
}

/// Run every query of a batch file.
pub fn run_batch(path: &str, formats: &[TextFormat]) -> Result<Vec<Report>, Box<dyn Error>> {
    let reports = read_queries(path)?
        .iter()
        .map(|q| q.run(formats))
        .collect();
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_queries() {
        let json = r#"[
            {"address": "192.168.1.10", "mask": "/24", "contains": ["192.168.1.200"]},
            {"address": "0xC0A80100"}
        ]"#;
        let queries = parse_queries(json).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].mask.as_deref(), Some("/24"));
        assert_eq!(queries[0].contains, vec!["192.168.1.200".to_string()]);
        assert_eq!(queries[1].mask, None);
        assert!(queries[1].contains.is_empty());
    }

    #[test]
    fn test_parse_queries_error_path() {
        let json = r#"[{"address": "10.0.0.1"}, {"address": 42}]"#;
        let err = parse_queries(json).unwrap_err().to_string();
        assert!(err.contains("path=[1].address"), "{err}");
    }

    #[test]
    fn test_read_queries_missing_file() {
        let err = read_queries("src/tests/test_data/does_not_exist.json").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Batch file does not exist: src/tests/test_data/does_not_exist.json"
        );
    }

    #[test]
    fn test_run_batch() {
        let reports = run_batch("src/tests/test_data/queries.json", &TextFormat::ALL)
            .expect("Error running batch");
        assert_eq!(reports.len(), 4);
        let facts = reports[0].subnet.as_ref().unwrap();
        assert_eq!(facts.host_count, Some(254));
        assert_eq!(facts.contains[0].contained, Some(true));
        assert_eq!(facts.contains[1].contained, Some(false));
        assert!(reports[1].subnet.is_none());
        assert!(!reports[2].mask.as_ref().unwrap().value.valid);
        assert!(!reports[3].address.value.valid);
    }
}

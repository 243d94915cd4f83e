//! Runtime configuration.
//!
//! Constants plus environment overrides (a `.env` file is loaded by `main`).

use crate::models::TextFormat;
use std::env;

/// Default log4rs configuration file.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Env var overriding [`LOG_CONFIG_FILE`].
pub const ENV_LOG_CONFIG: &str = "IPV4_TOOLKIT_LOG_CONFIG";

/// Env var with a comma separated list of formats to report, e.g. `Hex,Long`.
pub const ENV_FORMATS: &str = "IPV4_TOOLKIT_FORMATS";

/// Formats reported when nothing else is configured.
pub const DEFAULT_FORMATS: [TextFormat; 7] = TextFormat::ALL;

/// Path of the log4rs configuration file.
pub fn log_config_file() -> String {
    env::var(ENV_LOG_CONFIG).unwrap_or_else(|_| LOG_CONFIG_FILE.to_string())
}

/// Formats to report, from [`ENV_FORMATS`] if set.
pub fn report_formats() -> Vec<TextFormat> {
    match env::var(ENV_FORMATS) {
        Ok(list) => parse_format_list(&list),
        Err(_) => DEFAULT_FORMATS.to_vec(),
    }
}

/// Parse a comma separated list of format names.
///
/// Unknown names are skipped with a warning. An empty result falls back to
/// [`DEFAULT_FORMATS`].
pub fn parse_format_list(list: &str) -> Vec<TextFormat> {
    let formats: Vec<TextFormat> = list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| {
            let format = TextFormat::from_name(name);
            if format.is_none() {
                log::warn!("Ignoring unknown format {name:?} in {ENV_FORMATS}");
            }
            format
        })
        .collect();
    if formats.is_empty() {
        DEFAULT_FORMATS.to_vec()
    } else {
        formats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_list() {
        assert_eq!(
            parse_format_list("Hex, long,Bin"),
            vec![TextFormat::Hex, TextFormat::Long, TextFormat::Bin]
        );
        assert_eq!(parse_format_list("Hex,Base64"), vec![TextFormat::Hex]);
        assert_eq!(parse_format_list(""), DEFAULT_FORMATS.to_vec());
        assert_eq!(parse_format_list("nope"), DEFAULT_FORMATS.to_vec());
    }
}

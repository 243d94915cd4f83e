//! Command line argument parsing.

use crate::models::TextFormat;
use std::error::Error;

pub const USAGE: &str = "\
Usage:
  ipv4-toolkit <address> [<mask>] [--contains <address>]... [--formats <list>] [--json]
  ipv4-toolkit --batch <file.json> [--formats <list>] [--json]

--formats takes a comma separated list such as Hex,Oct,Long.

Addresses may be written as 192.168.1.10, 0xC0A8010A, 0xC0.0xA8.0x01.0x0A,
0300.0250.0001.0012, a 32 digit binary string or a (signed) decimal integer.
Masks additionally accept /1 to /32.";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Report on one address and optional mask.
    Query {
        address: String,
        mask: Option<String>,
        contains: Vec<String>,
    },
    /// Report on every query of a batch file.
    Batch { path: String },
    Help,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub command: Command,
    /// Print JSON instead of terminal lines.
    pub json: bool,
    /// Formats to report, `None` to use the configured default.
    pub formats: Option<Vec<TextFormat>>,
}

/// Parse a comma separated list of format names, failing on unknown names.
pub fn parse_formats(list: &str) -> Result<Vec<TextFormat>, Box<dyn Error>> {
    let formats = list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::parse::<TextFormat>)
        .collect::<Result<Vec<_>, _>>()?;
    if formats.is_empty() {
        return Err("--formats needs at least one format".into());
    }
    Ok(formats)
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Args, Box<dyn Error>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut json = false;
    let mut formats = None;
    let mut batch: Option<String> = None;
    let mut contains = Vec::new();
    let mut positional = Vec::new();

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(Args {
                    command: Command::Help,
                    json,
                    formats,
                })
            }
            "--json" => json = true,
            "--contains" | "-c" => {
                let value = args.next().ok_or("--contains needs an address")?;
                contains.push(value);
            }
            "--formats" | "-f" => {
                let value = args.next().ok_or("--formats needs a list of formats")?;
                formats = Some(parse_formats(&value)?);
            }
            "--batch" | "-b" => {
                let value = args.next().ok_or("--batch needs a file name")?;
                batch = Some(value);
            }
            // single dash values are left alone, "-1" is a valid address
            s if s.starts_with("--") => return Err(format!("Unknown option: {s}").into()),
            _ => positional.push(arg),
        }
    }

    let command = match batch {
        Some(path) => {
            if !positional.is_empty() || !contains.is_empty() {
                return Err("--batch can not be combined with an address".into());
            }
            Command::Batch { path }
        }
        None => {
            if positional.len() > 2 {
                return Err(format!("Too many arguments: {positional:?}").into());
            }
            let mut positional = positional.into_iter();
            let address = positional.next().ok_or("Missing address")?;
            Command::Query {
                address,
                mask: positional.next(),
                contains,
            }
        }
    };

    log::debug!("parse_args() -> {command:?} json={json} formats={formats:?}");
    Ok(Args {
        command,
        json,
        formats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let args = parse_args(["192.168.1.10", "/24", "--contains", "192.168.1.1", "--json"]).unwrap();
        assert!(args.json);
        assert_eq!(
            args.command,
            Command::Query {
                address: "192.168.1.10".to_string(),
                mask: Some("/24".to_string()),
                contains: vec!["192.168.1.1".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_negative_long_address() {
        let args = parse_args(["-1"]).unwrap();
        assert_eq!(
            args.command,
            Command::Query {
                address: "-1".to_string(),
                mask: None,
                contains: vec![],
            }
        );
    }

    #[test]
    fn test_parse_batch() {
        let args = parse_args(["--batch", "queries.json"]).unwrap();
        assert_eq!(
            args.command,
            Command::Batch {
                path: "queries.json".to_string()
            }
        );
        assert!(!args.json);
    }

    #[test]
    fn test_parse_errors() {
        let none: [&str; 0] = [];
        assert_eq!(parse_args(none).unwrap_err().to_string(), "Missing address");
        assert_eq!(
            parse_args(["--contains"]).unwrap_err().to_string(),
            "--contains needs an address"
        );
        assert_eq!(
            parse_args(["--verbose"]).unwrap_err().to_string(),
            "Unknown option: --verbose"
        );
        assert!(parse_args(["1.2.3.4", "/8", "extra"]).is_err());
        assert!(parse_args(["--batch", "q.json", "1.2.3.4"]).is_err());
    }

    #[test]
    fn test_parse_formats() {
        let args = parse_args(["10.0.0.1", "--formats", "hex, Oct,Long"]).unwrap();
        assert_eq!(
            args.formats,
            Some(vec![TextFormat::Hex, TextFormat::Oct, TextFormat::Long])
        );
        assert_eq!(parse_args(["10.0.0.1"]).unwrap().formats, None);
        assert_eq!(
            parse_args(["10.0.0.1", "--formats", "Hex,Base64"])
                .unwrap_err()
                .to_string(),
            "Unknown format: Base64"
        );
        assert_eq!(
            parse_formats(" , ").unwrap_err().to_string(),
            "--formats needs at least one format"
        );
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse_args(["-h"]).unwrap().command, Command::Help);
    }
}

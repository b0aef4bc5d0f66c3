//! pylex-gen - Output writers for pylex scanner tables
//!
//! A [`ScannerTable`](pylex_fa::ScannerTable) can be written as a
//! standalone C scanner ([`emit_c`]) or as JSON ([`emit_json`]).

pub mod c;
pub mod error;
pub mod json;

use std::fmt;
use std::str::FromStr;

use pylex_fa::ScannerTable;
use serde::{Deserialize, Serialize};

pub use c::{emit_c, is_c_identifier, COptions, DEFAULT_FUNCTION_NAME};
pub use error::{GenError, GenResult};
pub use json::emit_json;

/// What `pylex generate` writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// C source defining the scanner function.
    #[default]
    C,
    /// The scanner table as JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::C => write!(f, "c"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(OutputFormat::C),
            "json" => Ok(OutputFormat::Json),
            _ => Err(GenError::UnknownFormat(s.to_string())),
        }
    }
}

/// Emits `table` in `format`.
pub fn emit(table: &ScannerTable, format: OutputFormat, options: &COptions) -> GenResult<String> {
    match format {
        OutputFormat::C => emit_c(table, options),
        OutputFormat::Json => emit_json(table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("c".parse::<OutputFormat>().unwrap(), OutputFormat::C);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(GenError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_format_display_matches_parse() {
        for format in [OutputFormat::C, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_emit_dispatches() {
        let table = pylex_fa::compile(&[pylex_re::Regex::Symbol(b'x')], true).unwrap();
        let c = emit(&table, OutputFormat::C, &COptions::default()).unwrap();
        let json = emit(&table, OutputFormat::Json, &COptions::default()).unwrap();
        assert!(c.starts_with("/* Generated by pylex"));
        assert!(json.starts_with('{'));
    }
}

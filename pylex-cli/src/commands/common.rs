//! Shared input handling for pylex commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use pylex_re::{Regex, RegexParser, RegexScanner};

use crate::error::{PylexError, Result};

/// Display name used for standard input in messages.
pub const STDIN_NAME: &str = "<stdin>";

/// Name of `path` as shown in diagnostics.
pub fn display_name(path: Option<&Path>) -> String {
    path.map_or_else(|| STDIN_NAME.to_string(), |p| p.display().to_string())
}

/// Reads a whole file, or standard input when `path` is `None`.
pub fn read_source(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).map_err(|e| {
            PylexError::FileOperation(format!("cannot read {}: {}", path.display(), e))
        }),
        None => {
            let mut buffer = Vec::new();
            io::stdin().lock().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Parses rule source, optionally writing the token log to `lex_log`.
pub fn parse_rules_logged(
    source: &[u8],
    name: &str,
    lex_log: Option<&mut dyn io::Write>,
) -> Result<Vec<Regex>> {
    let scanner = match lex_log {
        Some(log) => RegexScanner::with_log(source, log),
        None => RegexScanner::new(source),
    };

    let rules = RegexParser::new(scanner)
        .parse_top_level()
        .map_err(|source| PylexError::Rules {
            path: name.to_string(),
            source,
        })?;

    tracing::debug!(rules = rules.len(), source = name, "parsed rules");
    Ok(rules)
}

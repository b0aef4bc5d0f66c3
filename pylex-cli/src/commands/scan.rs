//! Scan command implementation.
//!
//! Compiles a rule file and dumps the tokens of an input in the same format
//! as `cpylex`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use pylex_drv::render_tokens;
use pylex_fa::Scanner;

use crate::commands::common::{display_name, parse_rules_logged, read_source};
use crate::commands::generate::build_table;
use crate::config::GenerateConfig;
use crate::error::{PylexError, Result};

/// Arguments for the scan command.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Rule file.
    pub rules: PathBuf,
    /// Input to scan; standard input when absent.
    pub input: Option<PathBuf>,
}

/// Runs `pylex scan`. Returns the number of tokens printed.
pub fn run_scan(args: ScanArgs, config: &GenerateConfig) -> Result<usize> {
    let name = display_name(Some(&args.rules));
    let source = read_source(Some(&args.rules))?;
    let rules = parse_rules_logged(&source, &name, None)?;
    let table = build_table(&rules, config.minimize)?;

    let input = open_input(args.input.as_deref())?;
    let scanner = Scanner::new(table, input);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let lines = render_tokens(scanner, &mut out)?;

    tracing::debug!(tokens = lines, input = %display_name(args.input.as_deref()), "scan finished");
    Ok(lines)
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                PylexError::FileOperation(format!("cannot open {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_input_is_file_error() {
        let dir = TempDir::new().unwrap();
        let rules = dir.path().join("rules.txt");
        std::fs::write(&rules, "a\n").unwrap();

        let args = ScanArgs {
            rules,
            input: Some(dir.path().join("missing.txt")),
        };
        assert!(matches!(
            run_scan(args, &GenerateConfig::default()),
            Err(PylexError::FileOperation(_))
        ));
    }

    #[test]
    fn test_bad_rules_are_reported() {
        let dir = TempDir::new().unwrap();
        let rules = dir.path().join("rules.txt");
        std::fs::write(&rules, "[a\n").unwrap();

        let args = ScanArgs { rules, input: None };
        assert!(matches!(
            run_scan(args, &GenerateConfig::default()),
            Err(PylexError::Rules { .. })
        ));
    }
}

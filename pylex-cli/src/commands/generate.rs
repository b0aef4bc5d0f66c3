//! Generate command implementation.
//!
//! Reads a rule file, builds NFA, DFA and (optionally) minimal DFA, and
//! writes the scanner as C source or as a JSON table.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use pylex_fa::{Dfa, Nfa, ScannerTable};
use pylex_gen::{emit, COptions, OutputFormat};
use pylex_re::Regex;

use crate::commands::common::{display_name, parse_rules_logged, read_source};
use crate::config::GenerateConfig;
use crate::error::{PylexError, Result};

/// Arguments for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Rule file; standard input when absent.
    pub rules: Option<PathBuf>,
    /// Output file; standard output when absent.
    pub output: Option<PathBuf>,
    /// Where to write the token log.
    pub lex_log: Option<PathBuf>,
    /// Where to write the parsed rules.
    pub ast_log: Option<PathBuf>,
    /// Output format, overriding the config.
    pub format: Option<OutputFormat>,
    /// Skip DFA minimization.
    pub no_minimize: bool,
    /// Function name, overriding the config.
    pub name: Option<String>,
}

/// Options after merging arguments over the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveOptions {
    pub minimize: bool,
    pub format: OutputFormat,
    pub function_name: String,
}

impl GenerateArgs {
    /// Merges these arguments over `config`.
    pub fn effective(&self, config: &GenerateConfig) -> EffectiveOptions {
        EffectiveOptions {
            minimize: config.minimize && !self.no_minimize,
            format: self.format.unwrap_or(config.format),
            function_name: self
                .name
                .clone()
                .unwrap_or_else(|| config.function_name.clone()),
        }
    }
}

/// Runs `pylex generate`.
pub fn run_generate(args: GenerateArgs, config: &GenerateConfig) -> Result<()> {
    let options = args.effective(config);
    let name = display_name(args.rules.as_deref());
    let source = read_source(args.rules.as_deref())?;

    let rules = match args.lex_log.as_deref() {
        Some(path) => {
            let mut log = create(path)?;
            let rules = parse_rules_logged(&source, &name, Some(&mut log));
            log.flush()?;
            rules?
        }
        None => parse_rules_logged(&source, &name, None)?,
    };

    if let Some(path) = args.ast_log.as_deref() {
        write_ast_log(path, &rules)?;
    }

    let table = build_table(&rules, options.minimize)?;
    let text = emit(
        &table,
        options.format,
        &COptions {
            function_name: options.function_name.clone(),
        },
    )?;

    match args.output.as_deref() {
        Some(path) => {
            let mut out = create(path)?;
            out.write_all(text.as_bytes())?;
            out.flush()?;
            tracing::info!(
                output = %path.display(),
                format = %options.format,
                states = table.state_count(),
                "wrote scanner"
            );
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Runs the automaton pipeline, logging the size of each stage.
pub fn build_table(rules: &[Regex], minimize: bool) -> Result<ScannerTable> {
    let nfa = Nfa::from_rules(rules)?;
    let dfa = Dfa::from_nfa(&nfa);
    tracing::debug!(nfa = nfa.len(), dfa = dfa.len(), "built automata");

    let dfa = if minimize {
        let minimized = dfa.minimized();
        tracing::debug!(states = minimized.len(), "minimized");
        minimized
    } else {
        dfa
    };

    Ok(ScannerTable::from_dfa(&dfa))
}

fn write_ast_log(path: &Path, rules: &[Regex]) -> Result<()> {
    let mut out = create(path)?;
    for rule in rules {
        writeln!(out, "{}", rule)?;
    }
    out.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new).map_err(|e| {
        PylexError::FileOperation(format!("cannot create {}: {}", path.display(), e))
    })
}

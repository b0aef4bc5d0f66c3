//! pylex CLI - scanner generator front end.
//!
//! `pylex generate` turns a rule file into a C scanner or a JSON table;
//! `pylex scan` runs the compiled rules over an input directly and prints
//! its tokens.

mod commands;
mod config;
mod error;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pylex_gen::OutputFormat;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_generate, run_scan, GenerateArgs, ScanArgs};
use config::Config;
use error::{PylexError, Result};

/// pylex - generate greedy table-driven scanners from regular rules
///
/// A rule file holds one regular expression per line; the n-th non-empty
/// line defines token category n. Earlier rules win ties.
#[derive(Parser, Debug)]
#[command(name = "pylex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate greedy table-driven scanners from regular rules", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PYLEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PYLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PYLEX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the pylex CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a scanner from a rule file
    ///
    /// Reads rules from RULES (or standard input) and writes C source, or
    /// the scanner table as JSON, to OUTPUT (or standard output).
    Generate(GenerateCommand),

    /// Scan input with a rule file and print its tokens
    ///
    /// Prints one `<category>: '<lexeme>'` line per token and stops at the
    /// first byte no rule matches.
    Scan(ScanCommand),
}

/// Arguments for the generate subcommand.
#[derive(Parser, Debug)]
struct GenerateCommand {
    /// Rule file (default: standard input)
    rules: Option<PathBuf>,

    /// Output file (default: standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a log of lexed rule tokens to FILE
    #[arg(short, long, value_name = "FILE")]
    lex: Option<PathBuf>,

    /// Write the parsed rule syntax trees to FILE
    #[arg(short, long, value_name = "FILE")]
    ast: Option<PathBuf>,

    /// Output format (c, json)
    #[arg(short = 'F', long)]
    format: Option<OutputFormat>,

    /// Disable DFA minimization (minimization enabled by default)
    #[arg(long, default_value_t = false)]
    no_minimize: bool,

    /// Name of the generated C function
    #[arg(short, long)]
    name: Option<String>,
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// Rule file
    rules: PathBuf,

    /// Input file (default: standard input)
    input: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr; stdout carries generated code and token dumps.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color && io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PylexError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Generate(args) => execute_generate(args, config),
        Commands::Scan(args) => execute_scan(args, config),
    }
}

/// Execute the generate command.
fn execute_generate(args: GenerateCommand, config: Config) -> Result<()> {
    let generate_args = GenerateArgs {
        rules: args.rules,
        output: args.output,
        lex_log: args.lex,
        ast_log: args.ast,
        format: args.format,
        no_minimize: args.no_minimize,
        name: args.name,
    };
    run_generate(generate_args, &config.generate)
}

/// Execute the scan command.
fn execute_scan(args: ScanCommand, config: Config) -> Result<()> {
    let scan_args = ScanArgs {
        rules: args.rules,
        input: args.input,
    };
    run_scan(scan_args, &config.generate).map(|_| ())
}

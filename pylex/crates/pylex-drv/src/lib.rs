//! pylex-drv - Token dump driver
//!
//! `cpylex` reads standard input, splits it into tokens with the built-in
//! rule set and prints one line per token:
//!
//! ```text
//! 1: 'def'
//! 9: ' '
//! 2: 'foo'
//! ```
//!
//! The pieces are usable on their own: any [`TokenSource`] can be fed to
//! [`render_tokens`], and [`Escaped`] renders arbitrary bytes on one line.

pub mod escape;
pub mod render;
pub mod rules;
pub mod source;
pub mod token;

mod edge_cases;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use pylex_fa::Scanner;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use escape::{escape, escape_byte, write_escaped, ByteEscape, Escaped};
pub use render::render_tokens;
pub use rules::{default_rules_source, default_table, DEFAULT_RULES};
pub use token::{Token, TokenSource};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PYLEX_LOG";

/// Installs a stderr logger filtered by `PYLEX_LOG` (default `warn`).
///
/// Colour is used only when stderr is a terminal.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Dumps the tokens of standard input to standard output.
pub fn run() -> Result<()> {
    init_logging()?;

    let table = default_table()?;
    let scanner = Scanner::new(table, io::stdin().lock());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_tokens(scanner, &mut out).context("failed to write tokens")?;

    Ok(())
}

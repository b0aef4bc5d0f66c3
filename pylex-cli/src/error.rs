//! Error handling module for the pylex CLI.
//!
//! Library errors are wrapped so every failure reaches `main` as one
//! [`PylexError`].

use pylex_fa::FaError;
use pylex_gen::GenError;
use pylex_re::ReError;
use thiserror::Error;

/// Main error type for the pylex CLI application.
#[derive(Error, Debug)]
pub enum PylexError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error in a rule file; `path` names the file or `<stdin>`.
    #[error("{path}:{source}")]
    Rules {
        path: String,
        #[source]
        source: ReError,
    },

    /// Error while building automata.
    #[error(transparent)]
    Automaton(#[from] FaError),

    /// Error while emitting the scanner.
    #[error(transparent)]
    Generate(#[from] GenError),

    /// Error when a named file cannot be read or written.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PylexError.
pub type Result<T> = std::result::Result<T, PylexError>;

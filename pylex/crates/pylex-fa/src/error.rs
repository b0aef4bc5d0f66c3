//! Errors raised while building automata or scanning input.

use std::io;

use thiserror::Error;

/// Automaton construction error.
#[derive(Debug, Error)]
pub enum FaError {
    /// Rule numbers must fit the C `int` used for categories.
    #[error("too many rules: {count}")]
    TooManyRules { count: usize },
}

/// Table scanner error.
#[derive(Debug, Error)]
pub enum ScanError {
    /// No non-empty prefix of the remaining input is accepted.
    #[error("no rule matches input at byte offset {offset} (byte {})", escape_byte(.byte))]
    NoMatch { offset: u64, byte: u8 },

    /// The underlying reader failed.
    #[error("read error: {0}")]
    Io(#[from] io::Error),
}

fn escape_byte(byte: &u8) -> String {
    format!("'{}'", byte.escape_ascii())
}

/// Result type for automaton construction.
pub type FaResult<T> = Result<T, FaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_display() {
        let err = ScanError::NoMatch {
            offset: 7,
            byte: 0x1b,
        };
        assert_eq!(
            err.to_string(),
            "no rule matches input at byte offset 7 (byte '\\x1b')"
        );
    }

    #[test]
    fn test_io_from() {
        let err: ScanError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, ScanError::Io(_)));
        assert_eq!(err.to_string(), "read error: boom");
    }
}

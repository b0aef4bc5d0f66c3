//! Error types for the rule language.

use std::io;

use thiserror::Error;

use crate::cursor::Position;

/// Error raised while scanning or parsing a rule file.
#[derive(Debug, Error)]
pub enum ReError {
    /// A `\` was the last byte of the input.
    #[error("{at}: trailing backslash")]
    TrailingBackslash { at: Position },

    /// A class range whose end byte sorts before its start byte.
    #[error("{at}: invalid range end")]
    InvalidRangeEnd { at: Position },

    /// A `[` or `[^` with no closing `]`.
    #[error("{at}: unmatched [ or [^")]
    UnmatchedBracket { at: Position },

    /// A `(` with no closing `)`.
    #[error("{at}: unmatched parentheses")]
    UnmatchedParen { at: Position },

    /// A symbol, class or `(` was required.
    #[error("{at}: expected regex term")]
    ExpectedTerm { at: Position },

    /// A rule was followed by something other than a newline.
    #[error("{at}: junk after regex")]
    JunkAfterRegex { at: Position },

    /// Writing the token log failed.
    #[error("failed to write token log: {0}")]
    Log(#[from] io::Error),
}

/// Result type alias for rule scanning and parsing.
pub type ReResult<T> = std::result::Result<T, ReError>;

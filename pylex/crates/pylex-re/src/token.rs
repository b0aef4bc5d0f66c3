//! Token definitions for the rule language.

use std::fmt;

use crate::byteset::ByteSet;

/// A token of a regular-expression rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexToken {
    /// End of the rule source. Returned again on every later call.
    Eof,
    /// Newline; terminates a rule.
    Eol,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `|`
    Pipe,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// A literal byte, possibly produced by an escape sequence.
    Symbol(u8),
    /// A bracketed character class, already resolved to its byte set.
    CharClass(ByteSet),
}

impl RegexToken {
    /// Returns true for the tokens that end a rule (`Eol` or `Eof`).
    pub fn is_end(&self) -> bool {
        matches!(self, RegexToken::Eof | RegexToken::Eol)
    }
}

impl fmt::Display for RegexToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexToken::Eof => f.write_str("EOF"),
            RegexToken::Eol => f.write_str("EOL"),
            RegexToken::Star => f.write_str("STAR"),
            RegexToken::Plus => f.write_str("PLUS"),
            RegexToken::Pipe => f.write_str("PIPE"),
            RegexToken::LParen => f.write_str("LPAREN"),
            RegexToken::RParen => f.write_str("RPAREN"),
            RegexToken::Symbol(b) => write!(f, "SYMBOL('{}')", b.escape_ascii()),
            RegexToken::CharClass(set) => write!(f, "CHARCLASS({})", set),
        }
    }
}

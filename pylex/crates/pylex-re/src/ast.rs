//! Abstract syntax of a single rule.

use std::fmt;

use crate::byteset::ByteSet;

/// A node in a regular-expression syntax tree.
///
/// Binary operators nest to the right: `abc` parses as
/// `Concatenation(a, Concatenation(b, c))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Regex {
    /// A single byte of the alphabet.
    Symbol(u8),
    /// Any one byte of the set.
    Class(ByteSet),
    /// Zero or more repetitions (`r*`).
    Kleene(Box<Regex>),
    /// One or more repetitions (`r+`).
    Plus(Box<Regex>),
    /// Either side (`r|s`).
    Alternation(Box<Regex>, Box<Regex>),
    /// Left side followed by right side (`rs`).
    Concatenation(Box<Regex>, Box<Regex>),
}

impl Regex {
    /// Shorthand for a boxed Kleene closure.
    pub fn kleene(operand: Regex) -> Self {
        Regex::Kleene(Box::new(operand))
    }

    /// Shorthand for a boxed one-or-more closure.
    pub fn plus(operand: Regex) -> Self {
        Regex::Plus(Box::new(operand))
    }

    /// Shorthand for a boxed alternation.
    pub fn alternation(lhs: Regex, rhs: Regex) -> Self {
        Regex::Alternation(Box::new(lhs), Box::new(rhs))
    }

    /// Shorthand for a boxed concatenation.
    pub fn concatenation(lhs: Regex, rhs: Regex) -> Self {
        Regex::Concatenation(Box::new(lhs), Box::new(rhs))
    }

    /// Returns true if the expression matches the empty string.
    pub fn is_nullable(&self) -> bool {
        match self {
            Regex::Symbol(_) | Regex::Class(_) => false,
            Regex::Kleene(_) => true,
            Regex::Plus(operand) => operand.is_nullable(),
            Regex::Alternation(lhs, rhs) => lhs.is_nullable() || rhs.is_nullable(),
            Regex::Concatenation(lhs, rhs) => lhs.is_nullable() && rhs.is_nullable(),
        }
    }
}

/// The AST log format, one constructor per node.
impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regex::Symbol(b) => write!(f, "Symbol('{}')", b.escape_ascii()),
            Regex::Class(set) => write!(f, "Class({})", set),
            Regex::Kleene(operand) => write!(f, "Kleene({})", operand),
            Regex::Plus(operand) => write!(f, "Plus({})", operand),
            Regex::Alternation(lhs, rhs) => write!(f, "Alternation({}, {})", lhs, rhs),
            Regex::Concatenation(lhs, rhs) => write!(f, "Concatenation({}, {})", lhs, rhs),
        }
    }
}

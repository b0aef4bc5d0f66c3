//! pylex-re - The rule language of the pylex scanner generator
//!
//! A rule file is a newline-separated list of regular expressions; rule
//! number *n* (counting non-empty lines from 1) defines token category *n*.
//! This crate turns rule source into syntax trees that `pylex-fa` compiles
//! to automata.
//!
//! # Example
//!
//! ```
//! use pylex_re::{parse_rules, Regex};
//!
//! let rules = parse_rules(b"if\n[a-z]+\n").unwrap();
//! assert_eq!(rules.len(), 2);
//! assert!(matches!(rules[1], Regex::Plus(_)));
//! ```
//!
//! # Syntax
//!
//! - `*`, `+` postfix repetition; `|` alternation; `(`, `)` grouping
//! - `\0 \a \b \t \n \v \f \r` control bytes, `\` before anything else
//!   makes it literal
//! - `[abc]`, `[a-z]`, `[^...]` byte classes over all 256 byte values
//!
//! # Module Structure
//!
//! - [`cursor`] - Byte cursor with line/column tracking
//! - [`token`] - Rule-language tokens
//! - [`scanner`] - Tokenizer, including escapes and classes
//! - [`ast`] - Regex syntax tree
//! - [`parser`] - Recursive-descent parser

pub mod ast;
pub mod byteset;
pub mod cursor;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod token;

mod edge_cases;

pub use ast::Regex;
pub use byteset::ByteSet;
pub use cursor::Position;
pub use error::{ReError, ReResult};
pub use parser::{parse_rules, RegexParser};
pub use scanner::RegexScanner;
pub use token::RegexToken;

//! pylex-fa - Finite automata and table scanners for pylex
//!
//! Rules parsed by `pylex-re` are compiled in three steps:
//!
//! 1. [`Nfa::from_rules`] - Thompson construction
//! 2. [`Dfa::from_nfa`] - subset construction, earliest rule wins ties
//! 3. [`Dfa::minimized`] - partition refinement
//!
//! and flattened into a [`ScannerTable`], which either drives a [`Scanner`]
//! directly or is handed to `pylex-gen` to emit a C scanner.
//!
//! # Example
//!
//! ```
//! use pylex_fa::{compile, Scanner};
//! use pylex_re::parse_rules;
//!
//! let table = compile(&parse_rules(b"[0-9]+\n \n").unwrap(), true).unwrap();
//! let mut scanner = Scanner::new(table, &b"12 7"[..]);
//! let token = Scanner::scan(&mut scanner).unwrap().unwrap();
//! assert_eq!((token.category, token.lexeme.as_slice()), (1, &b"12"[..]));
//! ```

pub mod dfa;
pub mod error;
pub mod minimize;
pub mod nfa;
pub mod scanner;
pub mod table;

mod edge_cases;

pub use dfa::{Dfa, DfaState, DfaStateId};
pub use error::{FaError, FaResult, ScanError};
pub use nfa::{Nfa, NfaState, NfaStateId};
pub use scanner::{ScannedToken, Scanner};
pub use table::ScannerTable;

use pylex_re::Regex;

/// Token category: the 1-based number of the rule that matched.
///
/// Kept as `i32` so it maps onto the `int` of generated C scanners.
pub type Category = i32;

/// Compiles a rule set into a scanner table.
pub fn compile(rules: &[Regex], minimize: bool) -> FaResult<ScannerTable> {
    let nfa = Nfa::from_rules(rules)?;
    let dfa = Dfa::from_nfa(&nfa);
    let dfa = if minimize { dfa.minimized() } else { dfa };
    Ok(ScannerTable::from_dfa(&dfa))
}

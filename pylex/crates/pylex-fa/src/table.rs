//! Dense scanner tables.

use serde::{Deserialize, Serialize};

use crate::dfa::Dfa;
use crate::Category;

/// Marks a missing transition in [`ScannerTable::transitions`].
pub const DEAD: i32 = -1;

/// Marks a non-accepting state in [`ScannerTable::accepting`].
pub const NOT_ACCEPTING: Category = 0;

/// A DFA flattened into the two arrays a generated scanner indexes.
///
/// State 0 is the start state. `transitions[s]` has exactly 256 entries;
/// each is a state number or [`DEAD`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerTable {
    /// Category accepted per state, or [`NOT_ACCEPTING`].
    pub accepting: Vec<Category>,

    /// Successor per state and byte value.
    pub transitions: Vec<Vec<i32>>,
}

impl ScannerTable {
    /// Flattens `dfa`.
    pub fn from_dfa(dfa: &Dfa) -> Self {
        let mut accepting = Vec::with_capacity(dfa.len());
        let mut transitions = Vec::with_capacity(dfa.len());

        for (_, state) in dfa.states() {
            accepting.push(state.accepting.unwrap_or(NOT_ACCEPTING));
            transitions.push(
                state
                    .transitions
                    .iter()
                    .map(|target| target.map_or(DEAD, |t| t.0 as i32))
                    .collect(),
            );
        }

        Self {
            accepting,
            transitions,
        }
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.accepting.len()
    }

    /// Category accepted in `state`, if any.
    pub fn accepting(&self, state: usize) -> Option<Category> {
        match self.accepting.get(state) {
            Some(&NOT_ACCEPTING) | None => None,
            Some(&category) => Some(category),
        }
    }

    /// Successor of `state` on `byte`, or `None` for the dead state.
    pub fn next_state(&self, state: usize, byte: u8) -> Option<usize> {
        let target = *self.transitions.get(state)?.get(byte as usize)?;
        usize::try_from(target).ok()
    }
}

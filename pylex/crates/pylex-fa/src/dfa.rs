//! Deterministic finite automata and subset construction.

use indexmap::IndexSet;
use pylex_util::{define_idx, IndexVec};

use crate::nfa::{Nfa, NfaStateId};
use crate::Category;

define_idx!(DfaStateId);

/// State 0 is always the start state.
pub const START: DfaStateId = DfaStateId(0);

/// A state of a [`Dfa`]. A missing transition leads to the dead state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState {
    /// Category accepted in this state, if any.
    pub accepting: Option<Category>,

    /// Successor for every byte value.
    pub transitions: Box<[Option<DfaStateId>; 256]>,
}

impl DfaState {
    fn new(accepting: Option<Category>) -> Self {
        Self {
            accepting,
            transitions: Box::new([None; 256]),
        }
    }
}

/// A deterministic finite automaton over the byte alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    states: IndexVec<DfaStateId, DfaState>,
}

impl Dfa {
    /// Builds an automaton from its states; [`START`] must be the first.
    pub(crate) fn from_states(states: IndexVec<DfaStateId, DfaState>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    /// Subset construction.
    ///
    /// Configurations are discovered breadth-first from the closure of the
    /// NFA start state, so the numbering is deterministic and the start
    /// state is [`START`]. The empty configuration is the dead state and is
    /// never materialized.
    pub fn from_nfa(nfa: &Nfa) -> Self {
        let mut configurations: IndexSet<Vec<NfaStateId>> = IndexSet::new();
        let mut states: IndexVec<DfaStateId, DfaState> = IndexVec::new();

        configurations.insert(nfa.epsilon_closure([nfa.start()]));

        let mut next = 0;
        while next < configurations.len() {
            let Some(configuration) = configurations.get_index(next).cloned() else {
                break;
            };

            let mut state = DfaState::new(nfa.configuration_accepting(&configuration));
            for byte in 0..=u8::MAX {
                let target = nfa.step(&configuration, byte);
                if target.is_empty() {
                    continue;
                }
                let (index, _) = configurations.insert_full(target);
                state.transitions[byte as usize] = Some(DfaStateId(index as u32));
            }

            states.push(state);
            next += 1;
        }

        tracing::debug!(
            nfa_states = nfa.len(),
            dfa_states = states.len(),
            "subset construction done"
        );
        Self::from_states(states)
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: a DFA has at least its start state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The state with id `id`.
    pub fn state(&self, id: DfaStateId) -> &DfaState {
        &self.states[id]
    }

    /// All states in id order.
    pub fn states(&self) -> impl Iterator<Item = (DfaStateId, &DfaState)> {
        self.states.iter_enumerated()
    }

    /// Follows the transition on `byte`, or `None` for the dead state.
    pub fn next_state(&self, from: DfaStateId, byte: u8) -> Option<DfaStateId> {
        self.states[from].transitions[byte as usize]
    }

    /// Longest prefix of `input` accepted by the automaton, with its category.
    pub fn longest_match(&self, input: &[u8]) -> Option<(usize, Category)> {
        let mut state = START;
        let mut best = self.states[state].accepting.map(|c| (0, c));

        for (index, &byte) in input.iter().enumerate() {
            match self.next_state(state, byte) {
                Some(next) => state = next,
                None => break,
            }
            if let Some(category) = self.states[state].accepting {
                best = Some((index + 1, category));
            }
        }

        best
    }
}

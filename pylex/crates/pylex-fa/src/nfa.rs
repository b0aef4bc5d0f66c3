//! Nondeterministic finite automata.
//!
//! Rules are compiled with Thompson's construction: every syntax node becomes
//! a fragment with one entry and one exit state, glued together with epsilon
//! edges. A rule set shares one fresh start state with an epsilon edge into
//! each rule's fragment; the exit state of rule *n* accepts category *n*.

use pylex_re::{ByteSet, Regex};
use pylex_util::{define_idx, IndexVec};

use crate::error::{FaError, FaResult};
use crate::Category;

define_idx!(NfaStateId);

/// A state of an [`Nfa`].
#[derive(Debug, Clone, Default)]
pub struct NfaState {
    /// Category accepted in this state, if any.
    pub accepting: Option<Category>,

    /// Edges consuming one byte from the set.
    pub transitions: Vec<(ByteSet, NfaStateId)>,

    /// Edges consuming no input.
    pub epsilon: Vec<NfaStateId>,
}

/// A nondeterministic finite automaton over the byte alphabet.
#[derive(Debug, Clone)]
pub struct Nfa {
    states: IndexVec<NfaStateId, NfaState>,
    start: NfaStateId,
}

/// Entry and exit of a partially built automaton.
#[derive(Clone, Copy)]
struct Fragment {
    start: NfaStateId,
    end: NfaStateId,
}

impl Nfa {
    /// Builds the automaton recognizing a rule set.
    ///
    /// Rule `rules[i]` accepts category `i + 1`.
    pub fn from_rules(rules: &[Regex]) -> FaResult<Self> {
        let mut nfa = Nfa {
            states: IndexVec::new(),
            start: NfaStateId(0),
        };
        nfa.start = nfa.add_state();

        for (index, rule) in rules.iter().enumerate() {
            let category = Category::try_from(index + 1).map_err(|_| FaError::TooManyRules {
                count: rules.len(),
            })?;

            let fragment = nfa.build(rule);
            nfa.states[fragment.end].accepting = Some(category);
            nfa.add_epsilon(nfa.start, fragment.start);
        }

        tracing::debug!(rules = rules.len(), states = nfa.states.len(), "built NFA");
        Ok(nfa)
    }

    /// The start state.
    pub fn start(&self) -> NfaStateId {
        self.start
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if the automaton has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The state with id `id`.
    pub fn state(&self, id: NfaStateId) -> &NfaState {
        &self.states[id]
    }

    fn add_state(&mut self) -> NfaStateId {
        self.states.push(NfaState::default())
    }

    fn add_epsilon(&mut self, from: NfaStateId, to: NfaStateId) {
        let edges = &mut self.states[from].epsilon;
        if !edges.contains(&to) {
            edges.push(to);
        }
    }

    fn add_transition(&mut self, from: NfaStateId, on: ByteSet, to: NfaStateId) {
        if !on.is_empty() {
            self.states[from].transitions.push((on, to));
        }
    }

    fn build(&mut self, regex: &Regex) -> Fragment {
        match regex {
            Regex::Symbol(byte) => self.build_set(ByteSet::single(*byte)),
            Regex::Class(set) => self.build_set(*set),
            Regex::Concatenation(lhs, rhs) => {
                let lhs = self.build(lhs);
                let rhs = self.build(rhs);
                self.add_epsilon(lhs.end, rhs.start);
                Fragment {
                    start: lhs.start,
                    end: rhs.end,
                }
            }
            Regex::Alternation(lhs, rhs) => {
                let lhs = self.build(lhs);
                let rhs = self.build(rhs);
                let start = self.add_state();
                let end = self.add_state();
                self.add_epsilon(start, lhs.start);
                self.add_epsilon(start, rhs.start);
                self.add_epsilon(lhs.end, end);
                self.add_epsilon(rhs.end, end);
                Fragment { start, end }
            }
            Regex::Kleene(operand) => {
                let inner = self.build(operand);
                let start = self.add_state();
                let end = self.add_state();
                self.add_epsilon(start, inner.start);
                self.add_epsilon(start, end);
                self.add_epsilon(inner.end, inner.start);
                self.add_epsilon(inner.end, end);
                Fragment { start, end }
            }
            Regex::Plus(operand) => {
                let inner = self.build(operand);
                let start = self.add_state();
                let end = self.add_state();
                self.add_epsilon(start, inner.start);
                self.add_epsilon(inner.end, inner.start);
                self.add_epsilon(inner.end, end);
                Fragment { start, end }
            }
        }
    }

    fn build_set(&mut self, set: ByteSet) -> Fragment {
        let start = self.add_state();
        let end = self.add_state();
        self.add_transition(start, set, end);
        Fragment { start, end }
    }

    /// All states reachable from `seeds` through epsilon edges, seeds
    /// included. The result is sorted and free of duplicates, so equal
    /// configurations compare equal.
    pub fn epsilon_closure(&self, seeds: impl IntoIterator<Item = NfaStateId>) -> Vec<NfaStateId> {
        let mut seen = vec![false; self.states.len()];
        let mut worklist: Vec<NfaStateId> = Vec::new();

        for seed in seeds {
            if !std::mem::replace(&mut seen[seed.0 as usize], true) {
                worklist.push(seed);
            }
        }

        let mut closure = Vec::new();
        while let Some(state) = worklist.pop() {
            closure.push(state);
            for &target in &self.states[state].epsilon {
                if !std::mem::replace(&mut seen[target.0 as usize], true) {
                    worklist.push(target);
                }
            }
        }

        closure.sort_unstable();
        closure
    }

    /// `EpsilonClosure(Delta(configuration, byte))`.
    pub fn step(&self, configuration: &[NfaStateId], byte: u8) -> Vec<NfaStateId> {
        let targets = configuration.iter().flat_map(|&state| {
            self.states[state]
                .transitions
                .iter()
                .filter(move |(on, _)| on.contains(byte))
                .map(|&(_, to)| to)
        });
        self.epsilon_closure(targets)
    }

    /// The smallest category accepted by any state in `configuration`.
    ///
    /// Choosing the minimum makes the earliest rule win when several rules
    /// match the same text.
    pub fn configuration_accepting(&self, configuration: &[NfaStateId]) -> Option<Category> {
        configuration
            .iter()
            .filter_map(|&state| self.states[state].accepting)
            .min()
    }

    /// Longest prefix of `input` accepted by the automaton, with its category.
    ///
    /// Simulates the automaton directly; used to cross-check the DFA.
    pub fn longest_match(&self, input: &[u8]) -> Option<(usize, Category)> {
        let mut configuration = self.epsilon_closure([self.start]);
        let mut best = self.configuration_accepting(&configuration).map(|c| (0, c));

        for (index, &byte) in input.iter().enumerate() {
            configuration = self.step(&configuration, byte);
            if configuration.is_empty() {
                break;
            }
            if let Some(category) = self.configuration_accepting(&configuration) {
                best = Some((index + 1, category));
            }
        }

        best
    }
}

//! DFA minimization by partition refinement.
//!
//! States start out grouped by accepting category and are split until every
//! block agrees on the block reached for each byte. The dead state is
//! treated as its own block.

use std::collections::VecDeque;

use pylex_util::{Idx, IndexVec};
use rustc_hash::FxHashMap;

use crate::dfa::{Dfa, DfaState, DfaStateId, START};
use crate::Category;

type Block = u32;

impl Dfa {
    /// Returns the minimal automaton equivalent to `self`.
    ///
    /// The start state's block becomes [`START`]; the remaining blocks are
    /// numbered in breadth-first order from it.
    pub fn minimized(&self) -> Dfa {
        let blocks = refine(self);
        let minimized = rebuild(self, &blocks);

        tracing::debug!(
            before = self.len(),
            after = minimized.len(),
            "minimized DFA"
        );
        minimized
    }
}

fn initial_partition(dfa: &Dfa) -> Vec<Block> {
    let mut ids: FxHashMap<Option<Category>, Block> = FxHashMap::default();
    dfa.states()
        .map(|(_, state)| {
            let next = ids.len() as Block;
            *ids.entry(state.accepting).or_insert(next)
        })
        .collect()
}

fn refine(dfa: &Dfa) -> Vec<Block> {
    let mut blocks = initial_partition(dfa);
    let mut count = count_blocks(&blocks);

    loop {
        let mut ids: FxHashMap<(Block, Vec<Option<Block>>), Block> = FxHashMap::default();
        let refined: Vec<Block> = dfa
            .states()
            .map(|(id, state)| {
                let signature = state
                    .transitions
                    .iter()
                    .map(|target| target.map(|t| blocks[t.index()]))
                    .collect();
                let next = ids.len() as Block;
                *ids.entry((blocks[id.index()], signature)).or_insert(next)
            })
            .collect();

        let refined_count = count_blocks(&refined);
        blocks = refined;
        if refined_count == count {
            return blocks;
        }
        count = refined_count;
    }
}

fn count_blocks(blocks: &[Block]) -> usize {
    blocks.iter().max().map_or(0, |&max| max as usize + 1)
}

fn rebuild(dfa: &Dfa, blocks: &[Block]) -> Dfa {
    // One representative per block; any member will do.
    let mut representative: FxHashMap<Block, DfaStateId> = FxHashMap::default();
    for (id, _) in dfa.states() {
        representative.entry(blocks[id.index()]).or_insert(id);
    }

    let mut numbering: FxHashMap<Block, DfaStateId> = FxHashMap::default();
    let mut order: Vec<Block> = Vec::new();
    let mut queue: VecDeque<Block> = VecDeque::new();

    let start_block = blocks[START.index()];
    numbering.insert(start_block, START);
    order.push(start_block);
    queue.push_back(start_block);

    while let Some(block) = queue.pop_front() {
        let state = dfa.state(representative[&block]);
        for target in state.transitions.iter().flatten() {
            let target_block = blocks[target.index()];
            if !numbering.contains_key(&target_block) {
                numbering.insert(target_block, DfaStateId::from_usize(order.len()));
                order.push(target_block);
                queue.push_back(target_block);
            }
        }
    }

    let states: IndexVec<DfaStateId, DfaState> = order
        .iter()
        .map(|block| {
            let old = dfa.state(representative[block]);
            let mut transitions = Box::new([None; 256]);
            for (slot, target) in transitions.iter_mut().zip(old.transitions.iter()) {
                *slot = target.map(|t| numbering[&blocks[t.index()]]);
            }
            DfaState {
                accepting: old.accepting,
                transitions,
            }
        })
        .collect();

    Dfa::from_states(states)
}

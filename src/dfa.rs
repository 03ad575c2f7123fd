// src/dfa.rs
//! Worklist subset-style construction over leaf-position sets. A DFA state
//! *is* a set of positions; identity is genuine set equality via canonical
//! sorted keys interned in a map (never a concatenated-digit label, which
//! would collide on e.g. {1,23} vs {12,3}).

use std::collections::{BTreeMap, BTreeSet};

use hashbrown::HashMap;

use crate::positions::{Pos, PositionSets};

pub type StateId = u32;

/// One row of the transition relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub symbol: char,
    pub to: StateId,
}

/// The finished automaton. State ids are dense `0..n_states` with the start
/// state at 0; they are stable and comparable within one build. The
/// underlying position sets are an implementation detail and are dropped
/// once construction finishes.
#[derive(Debug, Clone)]
pub struct Dfa {
    pub n_states: u32,
    pub start: StateId,
    /// Sorted ascending.
    pub accepting: Vec<StateId>,
    /// Sorted by (from, symbol); at most one entry per pair.
    pub transitions: Vec<Transition>,
    edges: HashMap<(StateId, char), StateId>,
}

impl Dfa {
    pub fn states(&self) -> impl Iterator<Item = StateId> {
        0..self.n_states
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.binary_search(&state).is_ok()
    }

    /// The deterministic successor, if any.
    pub fn transition(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.edges.get(&(state, symbol)).copied()
    }

    /// Walk the automaton over `input`. A missing edge rejects immediately.
    pub fn accepts(&self, input: &str) -> bool {
        let mut state = self.start;
        for ch in input.chars() {
            match self.transition(state, ch) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }

    /// Rebuild the lookup map from a transition list (deserialization path).
    pub(crate) fn from_parts(
        n_states: u32,
        start: StateId,
        accepting: Vec<StateId>,
        transitions: Vec<Transition>,
    ) -> Self {
        let edges = transitions
            .iter()
            .map(|t| ((t.from, t.symbol), t.to))
            .collect();
        Dfa {
            n_states,
            start,
            accepting,
            transitions,
            edges,
        }
    }
}

/// Build the DFA from a finished followpos table.
///
/// Start state = firstpos(root). For each discovered state and each alphabet
/// letter among its positions, the successor is the union of followpos over
/// the positions carrying that letter; an empty union adds no edge. New
/// position sets are interned as they appear, so each `(state, symbol)` pair
/// yields exactly one successor and the loop terminates once no new set
/// shows up (bounded by 2^n subsets). Letters are visited in sorted order so
/// state numbering is deterministic across runs.
pub fn build(sets: &PositionSets) -> Dfa {
    let start_key: Vec<Pos> = sets.root_first.iter().copied().collect();

    let mut key_to_id: HashMap<Vec<Pos>, StateId> = HashMap::new();
    let mut state_keys: Vec<Vec<Pos>> = Vec::new();
    key_to_id.insert(start_key.clone(), 0);
    state_keys.push(start_key);

    let mut transitions: Vec<Transition> = Vec::new();
    let mut edges: HashMap<(StateId, char), StateId> = HashMap::new();

    let mut cursor = 0usize;
    while cursor < state_keys.len() {
        let from = cursor as StateId;

        // Union followpos per letter in one pass over this state's
        // positions. BTreeMap keeps the letter order sorted.
        let mut successors: BTreeMap<char, BTreeSet<Pos>> = BTreeMap::new();
        for &p in &state_keys[cursor] {
            if let Some(letter) = sets.symbol(p) {
                successors
                    .entry(letter)
                    .or_default()
                    .extend(sets.follow(p).iter().copied());
            }
        }

        for (letter, succ) in successors {
            if succ.is_empty() {
                continue;
            }
            let key: Vec<Pos> = succ.into_iter().collect();
            let to = match key_to_id.get(&key) {
                Some(&id) => id,
                None => {
                    let id = state_keys.len() as StateId;
                    key_to_id.insert(key.clone(), id);
                    state_keys.push(key);
                    id
                }
            };
            edges.insert((from, letter), to);
            transitions.push(Transition {
                from,
                symbol: letter,
                to,
            });
        }

        cursor += 1;
    }

    let accepting: Vec<StateId> = state_keys
        .iter()
        .enumerate()
        .filter(|(_, key)| sets.accepting != 0 && key.binary_search(&sets.accepting).is_ok())
        .map(|(id, _)| id as StateId)
        .collect();

    log::debug!(
        "dfa: {} states, {} transitions, {} accepting",
        state_keys.len(),
        transitions.len(),
        accepting.len()
    );

    Dfa {
        n_states: state_keys.len() as u32,
        start: 0,
        accepting,
        transitions,
        edges,
    }
}

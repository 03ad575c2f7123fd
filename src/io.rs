// src/io.rs
use std::io::{BufWriter, Write};

use serde::{Deserialize, Serialize};

use crate::dfa::{Dfa, Transition};

// -------------------- JSON (de)serialization --------------------

#[derive(Serialize, Deserialize)]
struct DfaDisk {
    n_states: u32,
    start: u32,
    accepting: Vec<u32>,
    transitions: Vec<(u32, char, u32)>,
}

impl From<&Dfa> for DfaDisk {
    fn from(dfa: &Dfa) -> Self {
        Self {
            n_states: dfa.n_states,
            start: dfa.start,
            accepting: dfa.accepting.clone(),
            transitions: dfa
                .transitions
                .iter()
                .map(|t| (t.from, t.symbol, t.to))
                .collect(),
        }
    }
}

impl DfaDisk {
    fn into_dfa(self) -> Dfa {
        let transitions = self
            .transitions
            .into_iter()
            .map(|(from, symbol, to)| Transition { from, symbol, to })
            .collect();
        Dfa::from_parts(self.n_states, self.start, self.accepting, transitions)
    }
}

pub fn save_dfa_json(path: &std::path::Path, dfa: &Dfa) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, &DfaDisk::from(dfa))?;
    w.flush()
}

pub fn dfa_to_json(dfa: &Dfa) -> String {
    // Serialization of the plain-data mirror cannot fail.
    serde_json::to_string_pretty(&DfaDisk::from(dfa)).unwrap_or_default()
}

pub fn load_dfa_json_bytes(data: &[u8]) -> Result<Dfa, String> {
    serde_json::from_slice::<DfaDisk>(data)
        .map(|d| d.into_dfa())
        .map_err(|e| format!("Failed to parse DFA JSON: {e}"))
}

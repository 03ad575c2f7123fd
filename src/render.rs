// src/render.rs
// Graphviz DOT rendering of a built DFA. Strictly a collaborator on top of
// the core's output tables; the pipeline never depends on it.

use std::fmt::Write as _;
use std::io::Write as _;

use crate::dfa::Dfa;

/// Render the automaton as a `digraph`. Accepting states are doublecircles;
/// an unlabeled arrow from a point node marks the start state.
pub fn dfa_to_dot(dfa: &Dfa) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph dfa {{");
    let _ = writeln!(out, "    rankdir=LR;");
    let _ = writeln!(out, "    __start [shape=point];");
    for s in dfa.states() {
        let shape = if dfa.is_accepting(s) {
            "doublecircle"
        } else {
            "circle"
        };
        let _ = writeln!(out, "    s{s} [shape={shape}];");
    }
    let _ = writeln!(out, "    __start -> s{};", dfa.start);
    for t in &dfa.transitions {
        let _ = writeln!(
            out,
            "    s{} -> s{} [label=\"{}\"];",
            t.from, t.to, t.symbol
        );
    }
    let _ = writeln!(out, "}}");
    out
}

pub fn save_dot(path: &std::path::Path, dfa: &Dfa) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    let mut w = std::io::BufWriter::new(f);
    w.write_all(dfa_to_dot(dfa).as_bytes())?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;

    #[test]
    fn dot_mentions_every_state_and_edge() {
        let dfa = compile("(a|b)*abb").expect("compile");
        let dot = dfa_to_dot(&dfa);
        assert!(dot.starts_with("digraph dfa {"));
        for s in dfa.states() {
            assert!(dot.contains(&format!("s{s} [shape=")), "missing state {s}");
        }
        assert_eq!(
            dot.matches("[label=\"").count(),
            dfa.transitions.len(),
            "one labeled edge per transition"
        );
        assert!(dot.contains("doublecircle"));
    }
}

// src/bin/gen_dfa.rs
// Read a regular expression from a file, build the DFA, and write JSON + DOT
// artifacts next to it for downstream renderers.

use std::path::Path;

use anyhow::{Context, Result};
use followpos::{compile, io::save_dfa_json, render::save_dot};

fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "input.txt".into());
    let raw = std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    // Editors leave a trailing newline; it is not part of the expression.
    let expr = raw.trim_end_matches(['\r', '\n']);

    println!("[gen_dfa] expression: {expr}");
    let dfa = compile(expr).with_context(|| format!("failed to compile {expr:?}"))?;
    println!(
        "[gen_dfa] {} states, {} transitions, {} accepting",
        dfa.n_states,
        dfa.transitions.len(),
        dfa.accepting.len()
    );

    let json_path = Path::new("dfa.json");
    save_dfa_json(json_path, &dfa)
        .with_context(|| format!("failed to write {}", json_path.display()))?;
    let dot_path = Path::new("dfa.dot");
    save_dot(dot_path, &dfa).with_context(|| format!("failed to write {}", dot_path.display()))?;
    println!(
        "[gen_dfa] wrote {} and {}",
        json_path.display(),
        dot_path.display()
    );
    Ok(())
}

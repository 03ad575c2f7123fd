// src/main.rs
use followpos::compile;

fn main() {
    // A tiny sample covering union, star, and implicit concatenation.
    let expr = std::env::args().nth(1).unwrap_or_else(|| "a(b|c)*d".into());

    match compile(&expr) {
        Ok(dfa) => {
            println!("expression: {expr}");
            println!(
                "{} states, start {}, accepting {:?}",
                dfa.n_states, dfa.start, dfa.accepting
            );
            println!("TRANSITIONS:");
            for t in &dfa.transitions {
                println!("  s{} --{}--> s{}", t.from, t.symbol, t.to);
            }
        }
        Err(e) => eprintln!("compile error: {e}"),
    }
}

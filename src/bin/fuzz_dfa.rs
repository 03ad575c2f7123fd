// src/bin/fuzz_dfa.rs
// Generate random expressions, build the DFA, and cross-check acceptance
// against the derivative oracle on both sampled-accepted and random words.
//   - FUZZ_SEED=<u64>    rng seed (default 42)
//   - FUZZ_ITERS=<n>     expressions per run (default 500)
//   - FUZZ_DEPTH=<n>     expression nesting bound (default 5)
//   - FUZZ_WORDS=<n>     probe words per expression (default 40)

use followpos::{
    compile,
    dev::{
        generator::{gen_expr, gen_word},
        oracle::Regex,
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

fn main() {
    let seed = env_u64("FUZZ_SEED", 42);
    let iters = env_u64("FUZZ_ITERS", 500) as usize;
    let depth = env_u64("FUZZ_DEPTH", 5) as u32;
    let words = env_u64("FUZZ_WORDS", 40) as usize;

    eprintln!("[fuzz] seed={seed} iters={iters} depth={depth} words={words}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut checked = 0usize;
    for i in 0..iters {
        let expr = gen_expr(&mut rng, depth);
        let oracle = match Regex::parse(&expr) {
            Some(re) => re,
            None => {
                eprintln!("[fuzz] iter {i}: oracle refused generated expr {expr:?}");
                std::process::exit(1);
            }
        };
        let dfa = match compile(&expr) {
            Ok(dfa) => dfa,
            Err(e) => {
                eprintln!("[fuzz] iter {i}: pipeline refused generated expr {expr:?}: {e}");
                std::process::exit(1);
            }
        };

        // Sampled-accepted words, random words, and always the empty word.
        let mut probes: Vec<String> = vec![String::new()];
        for _ in 0..words / 2 {
            let mut s = String::new();
            oracle.sample(&mut rng, &mut s);
            probes.push(s);
        }
        for _ in 0..words / 2 {
            let max = rng.random_range(1..=10);
            probes.push(gen_word(&mut rng, max));
        }

        for w in &probes {
            let want = oracle.matches(w);
            let got = dfa.accepts(w);
            if want != got {
                eprintln!(
                    "[fuzz] MISMATCH on expr {expr:?}, word {w:?}: oracle={want} dfa={got}\n\
                     replay with FUZZ_SEED={seed}"
                );
                std::process::exit(1);
            }
            checked += 1;
        }
    }
    eprintln!("[fuzz] {iters} expressions, {checked} words checked, all matched");
}

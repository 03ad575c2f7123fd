//! Round-trip acceptance against the derivative oracle: for a batch of
//! seeded random expressions, the DFA's transition walk must agree with the
//! reference matcher on sampled-accepted words, random words, and the empty
//! word. Seed is env-tunable for replay (ORACLE_SEED).

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

#[test]
fn random_expressions_agree_with_oracle() {
    let seed = env_u64("ORACLE_SEED", 0xDFA);
    let iters = env_u64("ORACLE_ITERS", 150) as usize;
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..iters {
        let expr = gen_expr(&mut rng, 4);
        let oracle = Regex::parse(&expr)
            .unwrap_or_else(|| panic!("iter {i}: oracle refused generated expr {expr:?}"));
        let dfa = compile(&expr)
            .unwrap_or_else(|e| panic!("iter {i}: pipeline refused {expr:?}: {e}"));

        let mut probes: Vec<String> = vec![String::new()];
        for _ in 0..12 {
            let mut s = String::new();
            oracle.sample(&mut rng, &mut s);
            probes.push(s);
        }
        for _ in 0..12 {
            let max = rng.random_range(1..=8);
            probes.push(gen_word(&mut rng, max));
        }

        for w in &probes {
            assert_eq!(
                dfa.accepts(w),
                oracle.matches(w),
                "expr {expr:?} diverged on {w:?} (seed {seed}, iter {i})"
            );
        }
    }
}

#[test]
fn handpicked_expressions_agree_on_exhaustive_short_words() {
    // Every word over {a,b} up to length 5, no randomness.
    let exprs = [
        "a(b|a)*b",
        "(a|b)*abb",
        "(ab)*",
        "a*b*",
        "(a|$)(b|$)",
        "((a|b)(a|b))*",
    ];
    let alphabet = ['a', 'b'];
    for expr in exprs {
        let oracle = Regex::parse(expr).expect("parse");
        let dfa = compile(expr).expect("compile");
        let mut words: Vec<String> = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..5 {
            let mut next = Vec::new();
            for w in &frontier {
                for c in alphabet {
                    let mut w2 = w.clone();
                    w2.push(c);
                    next.push(w2);
                }
            }
            words.extend(next.iter().cloned());
            frontier = next;
        }
        for w in &words {
            assert_eq!(
                dfa.accepts(w),
                oracle.matches(w),
                "expr {expr:?} diverged on {w:?}"
            );
        }
    }
}

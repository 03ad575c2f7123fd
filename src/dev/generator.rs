// src/dev/generator.rs
// Random well-formed expressions over a small alphabet. Concatenation is
// always by adjacency (never an explicit `.`) so the normalizer's
// detect-and-skip idempotence shortcut never fires on generated input.

use rand::Rng;

const LETTERS: &[u8] = b"abcd";

fn leaf<R: Rng>(rng: &mut R, out: &mut String) {
    if rng.random_bool(0.06) {
        out.push('$');
    } else {
        let i = rng.random_range(0..LETTERS.len());
        out.push(LETTERS[i] as char);
    }
}

fn node<R: Rng>(rng: &mut R, out: &mut String, depth: u32) {
    if depth == 0 {
        leaf(rng, out);
        return;
    }
    match rng.random_range(0u32..100) {
        0..=34 => leaf(rng, out),
        35..=59 => {
            node(rng, out, depth - 1);
            out.push('|');
            node(rng, out, depth - 1);
        }
        60..=84 => {
            node(rng, out, depth - 1);
            node(rng, out, depth - 1);
        }
        _ => {
            out.push('(');
            node(rng, out, depth - 1);
            out.push(')');
            out.push('*');
        }
    }
}

/// One random expression with nesting bounded by `depth`.
pub fn gen_expr<R: Rng>(rng: &mut R, depth: u32) -> String {
    let mut out = String::new();
    node(rng, &mut out, depth);
    out
}

/// A random word over the generator alphabet, for negative-side probing.
pub fn gen_word<R: Rng>(rng: &mut R, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let i = rng.random_range(0..LETTERS.len());
        out.push(LETTERS[i] as char);
    }
    out
}

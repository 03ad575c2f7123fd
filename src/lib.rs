// src/lib.rs
//! Direct regular-expression → DFA construction (Aho–Sethi–Ullman): the
//! expression is scanned, concatenation made explicit, converted to postfix,
//! and the firstpos/lastpos/followpos algebra over the postfix sequence
//! drives a worklist subset construction. No intermediate NFA, no syntax
//! tree.
//!
//! Surface grammar: ASCII letters, `|` (union), `*` (star), `(` `)`
//! (grouping), `$` (empty word), `.` (optional explicit concatenation —
//! adjacency works too). Anything else is rejected.

pub mod dev;
pub mod dfa;
pub mod error;
pub mod io;
pub mod normalize;
pub mod positions;
pub mod postfix;
pub mod render;
pub mod token;

pub use dfa::{Dfa, StateId, Transition};
pub use error::CompileError;

/// Run the whole pipeline. Empty input yields the degenerate automaton that
/// accepts exactly the empty string.
pub fn compile(expr: &str) -> Result<Dfa, CompileError> {
    let tokens = token::scan(expr)?;
    let tokens = normalize::insert_concats(tokens);
    let postfix = postfix::to_postfix(tokens)?;
    let sets = positions::compute(&postfix)?;
    Ok(dfa::build(&sets))
}

/// Like [`compile`], but callers that consider an empty expression a mistake
/// get an error instead of the degenerate automaton.
pub fn compile_nonempty(expr: &str) -> Result<Dfa, CompileError> {
    if expr.is_empty() {
        return Err(CompileError::EmptyExpression);
    }
    compile(expr)
}

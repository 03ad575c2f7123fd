// src/error.rs
use thiserror::Error;

/// Everything the pipeline can reject an expression for. All variants are
/// detected synchronously by the stage that discovers them; there is no
/// transient failure mode and no retry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A character outside the input grammar (letters, `$`, `(`, `)`, `|`,
    /// `*`, `.`). Fatal for the production pipeline; `scan_lenient` collects
    /// these instead.
    #[error("illegal character {ch:?} at offset {offset}")]
    IllegalChar { ch: char, offset: usize },

    /// A `)` with no matching `(` (or a `(` left open at end of input),
    /// reported with the offending token's index.
    #[error("unbalanced parentheses at token index {index}")]
    UnbalancedParens { index: usize },

    /// An operator in the postfix sequence had fewer completed operands than
    /// its arity requires (e.g. `a||b`). Survives parenthesis balancing, so
    /// it gets its own kind.
    #[error("operator at token index {index} is missing an operand")]
    MissingOperand { index: usize },

    /// Only produced by `compile_nonempty`; plain `compile` maps empty input
    /// to the degenerate accept-only-the-empty-string automaton instead.
    #[error("empty expression")]
    EmptyExpression,
}

// src/postfix.rs
use crate::error::CompileError;
use crate::token::{Token, TokenKind};

fn precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Union => 1,
        TokenKind::Concat => 2,
        // Star binds tightest but never reaches the stack: as a unary
        // postfix operator its operand is already in the output when it
        // arrives, so it goes straight out.
        TokenKind::Star => 3,
        _ => 0,
    }
}

fn is_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Union | TokenKind::Concat | TokenKind::Star
    )
}

fn is_group(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::GroupOpen | TokenKind::GroupClose)
}

/// Shunting-yard conversion of a concatenation-explicit infix sequence into
/// postfix order. Precedence: `Star` > `Concat` > `Union`.
///
/// A `GroupClose` with no matching `GroupOpen` is `UnbalancedParens`; so is a
/// caller parenthesis that would pair up with one of the scanner's wrapping
/// parens (that is how `a)(b` stays an error even though the wrap makes the
/// raw counts line up). Stack emptiness is checked before every pop.
///
/// Idempotent: a sequence that already ends with an operator and carries no
/// grouping tokens is pure postfix and is returned unchanged.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, CompileError> {
    let already_postfix = tokens
        .last()
        .map(|t| is_operator(t.kind))
        .unwrap_or(false)
        && !tokens.iter().any(|t| is_group(t.kind));
    if already_postfix {
        return Ok(tokens);
    }

    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for tok in tokens {
        match tok.kind {
            TokenKind::Symbol | TokenKind::EmptyWord | TokenKind::Star => {
                let index = out.len();
                out.push(tok.reindexed(index));
            }
            TokenKind::GroupOpen => ops.push(tok),
            TokenKind::GroupClose => loop {
                match ops.pop() {
                    Some(op) if op.kind == TokenKind::GroupOpen => {
                        if op.synthetic != tok.synthetic {
                            // A caller paren consumed a wrapping one (or the
                            // other way round): the caller's own parens were
                            // unbalanced.
                            return Err(CompileError::UnbalancedParens { index: tok.index });
                        }
                        break;
                    }
                    Some(op) => {
                        let index = out.len();
                        out.push(op.reindexed(index));
                    }
                    None => return Err(CompileError::UnbalancedParens { index: tok.index }),
                }
            },
            TokenKind::Union | TokenKind::Concat => {
                while ops
                    .last()
                    .is_some_and(|top| is_operator(top.kind) && precedence(top.kind) >= precedence(tok.kind))
                {
                    if let Some(op) = ops.pop() {
                        let index = out.len();
                        out.push(op.reindexed(index));
                    }
                }
                ops.push(tok);
            }
        }
    }

    while let Some(op) = ops.pop() {
        if op.kind == TokenKind::GroupOpen {
            return Err(CompileError::UnbalancedParens { index: op.index });
        }
        let index = out.len();
        out.push(op.reindexed(index));
    }

    log::trace!("postfix: {} tokens", out.len());
    Ok(out)
}

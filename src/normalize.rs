// src/normalize.rs
use crate::token::{Token, TokenKind};

fn can_end_subexpr(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Symbol | TokenKind::EmptyWord | TokenKind::Star | TokenKind::GroupClose
    )
}

fn can_start_subexpr(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Symbol | TokenKind::EmptyWord | TokenKind::GroupOpen
    )
}

/// Insert an explicit `Concat` wherever two sub-expressions sit next to each
/// other with no operator between them: before a token that can start a
/// sub-expression whenever the previous token could end one.
///
/// Idempotent: an explicit `Concat` (a prior run of this pass, or a
/// caller-written `.`) cannot end a sub-expression, so re-running the pass —
/// or feeding it partially-dotted input — inserts nothing where an operator
/// already sits. Output indices are recomputed.
pub fn insert_concats(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    let mut prev: Option<TokenKind> = None;
    for tok in tokens {
        if can_start_subexpr(tok.kind) && prev.map(can_end_subexpr).unwrap_or(false) {
            let index = out.len();
            out.push(Token::synthetic(TokenKind::Concat, '.', index));
        }
        prev = Some(tok.kind);
        let index = out.len();
        out.push(tok.reindexed(index));
    }
    log::trace!("normalize: {} tokens after concat insertion", out.len());
    out
}

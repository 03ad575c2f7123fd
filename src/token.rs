// src/token.rs
use crate::error::CompileError;

/// Token kinds for the regex surface grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Symbol,
    EmptyWord,
    Union,
    Star,
    Concat,
    GroupOpen,
    GroupClose,
}

/// One token of whichever sequence currently holds it. `index` is only
/// meaningful within that sequence and is recomputed at every stage.
///
/// `synthetic` marks tokens the scanner injected around the caller's input:
/// the wrapping group and the trailing end-marker. The postfix converter uses
/// it to refuse caller parentheses that pair up with a wrapping one, and the
/// position sweep uses it to tell the end-marker `$` (not nullable, the
/// accepting sentinel) apart from an interior `$` (the nullable empty word).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: char,
    pub index: usize,
    pub synthetic: bool,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, value: char, index: usize) -> Self {
        Token {
            kind,
            value,
            index,
            synthetic: false,
        }
    }

    pub(crate) fn synthetic(kind: TokenKind, value: char, index: usize) -> Self {
        Token {
            kind,
            value,
            index,
            synthetic: true,
        }
    }

    pub(crate) fn reindexed(self, index: usize) -> Self {
        Token { index, ..self }
    }
}

fn classify(ch: char) -> Option<TokenKind> {
    match ch {
        'a'..='z' | 'A'..='Z' => Some(TokenKind::Symbol),
        '$' => Some(TokenKind::EmptyWord),
        '|' => Some(TokenKind::Union),
        '*' => Some(TokenKind::Star),
        '.' => Some(TokenKind::Concat),
        '(' => Some(TokenKind::GroupOpen),
        ')' => Some(TokenKind::GroupClose),
        _ => None,
    }
}

/// Scan a raw expression into tokens, wrapping non-empty input as `(expr)$`.
/// The wrap guarantees the end-marker concatenates with the whole expression
/// regardless of top-level unions. Empty input degenerates to the bare
/// end-marker, which downstream turns into the accept-only-the-empty-string
/// automaton.
///
/// The first illegal character aborts the scan.
pub fn scan(input: &str) -> Result<Vec<Token>, CompileError> {
    let mut out = Vec::with_capacity(input.len() + 3);
    if !input.is_empty() {
        out.push(Token::synthetic(TokenKind::GroupOpen, '(', 0));
        for (offset, ch) in input.chars().enumerate() {
            let kind = classify(ch).ok_or(CompileError::IllegalChar { ch, offset })?;
            let index = out.len();
            out.push(Token::new(kind, ch, index));
        }
        let index = out.len();
        out.push(Token::synthetic(TokenKind::GroupClose, ')', index));
    }
    let index = out.len();
    out.push(Token::synthetic(TokenKind::EmptyWord, '$', index));
    log::trace!("scan: {} chars -> {} tokens", input.len(), out.len());
    Ok(out)
}

/// Diagnostic/lint variant: skip illegal characters and collect one error per
/// offender instead of aborting. Never used by the production pipeline.
pub fn scan_lenient(input: &str) -> (Vec<Token>, Vec<CompileError>) {
    let mut out = Vec::with_capacity(input.len() + 3);
    let mut errors = Vec::new();
    if !input.is_empty() {
        out.push(Token::synthetic(TokenKind::GroupOpen, '(', 0));
        for (offset, ch) in input.chars().enumerate() {
            match classify(ch) {
                Some(kind) => {
                    let index = out.len();
                    out.push(Token::new(kind, ch, index));
                }
                None => errors.push(CompileError::IllegalChar { ch, offset }),
            }
        }
        let index = out.len();
        out.push(Token::synthetic(TokenKind::GroupClose, ')', index));
    }
    let index = out.len();
    out.push(Token::synthetic(TokenKind::EmptyWord, '$', index));
    (out, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_appends_end_marker() {
        let toks = scan("a|b").expect("scan should succeed");
        let kinds: Vec<TokenKind> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::GroupOpen,
                TokenKind::Symbol,
                TokenKind::Union,
                TokenKind::Symbol,
                TokenKind::GroupClose,
                TokenKind::EmptyWord,
            ]
        );
        assert!(toks.first().map(|t| t.synthetic).unwrap_or(false));
        assert!(toks.last().map(|t| t.synthetic).unwrap_or(false));
        // Caller tokens are not synthetic.
        assert!(toks[1..4].iter().all(|t| !t.synthetic));
    }

    #[test]
    fn empty_input_is_just_the_end_marker() {
        let toks = scan("").expect("empty input is not a scan error");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::EmptyWord);
        assert!(toks[0].synthetic);
    }

    #[test]
    fn illegal_character_is_fatal_with_offset() {
        match scan("ab+c") {
            Err(CompileError::IllegalChar { ch: '+', offset: 2 }) => {}
            other => panic!("expected IllegalChar at offset 2, got {other:?}"),
        }
    }

    #[test]
    fn lenient_scan_skips_and_collects() {
        let (toks, errs) = scan_lenient("a?b!");
        assert_eq!(errs.len(), 2);
        // a, b survive plus the wrap and marker
        let symbols = toks
            .iter()
            .filter(|t| t.kind == TokenKind::Symbol)
            .count();
        assert_eq!(symbols, 2);
    }

    #[test]
    fn indices_are_sequential() {
        let toks = scan("ab*").expect("scan should succeed");
        for (i, t) in toks.iter().enumerate() {
            assert_eq!(t.index, i);
        }
    }
}

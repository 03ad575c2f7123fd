// src/positions.rs
//! The position-set algebra: nullability, firstpos, lastpos, and the global
//! followpos table, computed in one left-to-right sweep of the postfix
//! sequence with an explicit descriptor stack. No syntax tree is built;
//! postfix order guarantees an operator's operand descriptors are the most
//! recently completed ones on the stack.

use std::collections::BTreeSet;

use crate::error::CompileError;
use crate::token::{Token, TokenKind};

/// A leaf position: a dense `1..=n` integer assigned to every symbol or
/// empty-word leaf in postfix order.
pub type Pos = u32;

/// Transient per-node state while sweeping; never persisted.
#[derive(Debug, Clone)]
struct NodeSets {
    nullable: bool,
    first: BTreeSet<Pos>,
    last: BTreeSet<Pos>,
}

/// Output of the sweep, owned by the caller. Local to one build — nothing is
/// shared between independent conversions.
#[derive(Debug, Clone)]
pub struct PositionSets {
    /// `symbols[p - 1]`: the alphabet letter at position `p`, or `None` for
    /// empty-word leaves (which never drive transitions).
    symbols: Vec<Option<char>>,
    /// `follow[p - 1]`: positions that can immediately follow `p`. Grows by
    /// union during the sweep, immutable afterwards.
    follow: Vec<BTreeSet<Pos>>,
    /// firstpos of the whole (end-marker-augmented) expression: the DFA
    /// start state.
    pub root_first: BTreeSet<Pos>,
    /// Nullability of the augmented root. The end-marker leaf is not
    /// nullable, so this is false whenever the marker is present; the user
    /// expression's own nullability surfaces as `root_first` containing the
    /// accepting position.
    pub root_nullable: bool,
    /// The end-marker's position (always the last leaf), or 0 if the
    /// sequence carried no marker.
    pub accepting: Pos,
}

impl PositionSets {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol(&self, p: Pos) -> Option<char> {
        self.symbols[(p - 1) as usize]
    }

    pub fn follow(&self, p: Pos) -> &BTreeSet<Pos> {
        &self.follow[(p - 1) as usize]
    }
}

fn pop_operand(stack: &mut Vec<NodeSets>, at: usize) -> Result<NodeSets, CompileError> {
    stack.pop().ok_or(CompileError::MissingOperand { index: at })
}

/// Sweep the postfix sequence once, computing node descriptors bottom-up and
/// fusing in the followpos contributions (operand descriptors are always
/// complete by the time their operator is visited, so the second sweep of
/// the textbook construction collapses into this one).
pub fn compute(postfix: &[Token]) -> Result<PositionSets, CompileError> {
    let mut stack: Vec<NodeSets> = Vec::new();
    let mut symbols: Vec<Option<char>> = Vec::new();
    let mut follow: Vec<BTreeSet<Pos>> = Vec::new();
    let mut accepting: Pos = 0;

    for tok in postfix {
        match tok.kind {
            TokenKind::Symbol | TokenKind::EmptyWord => {
                let p = symbols.len() as Pos + 1;
                let is_marker = tok.kind == TokenKind::EmptyWord && tok.synthetic;
                if is_marker {
                    accepting = p;
                }
                symbols.push((tok.kind == TokenKind::Symbol).then_some(tok.value));
                follow.push(BTreeSet::new());
                stack.push(NodeSets {
                    // Interior `$` is the nullable empty word; the appended
                    // end-marker stands for "end of input" and is not.
                    nullable: tok.kind == TokenKind::EmptyWord && !is_marker,
                    first: BTreeSet::from([p]),
                    last: BTreeSet::from([p]),
                });
            }
            TokenKind::Star => {
                let c = pop_operand(&mut stack, tok.index)?;
                for &p in &c.last {
                    follow[(p - 1) as usize].extend(c.first.iter().copied());
                }
                stack.push(NodeSets {
                    nullable: true,
                    first: c.first,
                    last: c.last,
                });
            }
            TokenKind::Union => {
                let c2 = pop_operand(&mut stack, tok.index)?;
                let mut c1 = pop_operand(&mut stack, tok.index)?;
                c1.first.extend(c2.first);
                c1.last.extend(c2.last);
                stack.push(NodeSets {
                    nullable: c1.nullable || c2.nullable,
                    first: c1.first,
                    last: c1.last,
                });
            }
            TokenKind::Concat => {
                let c2 = pop_operand(&mut stack, tok.index)?;
                let c1 = pop_operand(&mut stack, tok.index)?;
                for &p in &c1.last {
                    follow[(p - 1) as usize].extend(c2.first.iter().copied());
                }
                let first = if c1.nullable {
                    c1.first.union(&c2.first).copied().collect()
                } else {
                    c1.first
                };
                let last = if c2.nullable {
                    c1.last.union(&c2.last).copied().collect()
                } else {
                    c2.last
                };
                stack.push(NodeSets {
                    nullable: c1.nullable && c2.nullable,
                    first,
                    last,
                });
            }
            TokenKind::GroupOpen | TokenKind::GroupClose => {
                // Grouping never survives postfix conversion.
                return Err(CompileError::UnbalancedParens { index: tok.index });
            }
        }
    }

    let root = match (stack.pop(), stack.last()) {
        (Some(root), None) => root,
        // Leftover operands mean an operator was missing between them.
        (Some(_), Some(_)) => {
            let index = postfix.last().map(|t| t.index).unwrap_or(0);
            return Err(CompileError::MissingOperand { index });
        }
        (None, _) => {
            // Zero tokens: degenerate, no positions at all.
            return Ok(PositionSets {
                symbols,
                follow,
                root_first: BTreeSet::new(),
                root_nullable: true,
                accepting: 0,
            });
        }
    };

    log::debug!(
        "positions: {} leaves, accepting position {}",
        symbols.len(),
        accepting
    );

    Ok(PositionSets {
        symbols,
        follow,
        root_first: root.first,
        root_nullable: root.nullable,
        accepting,
    })
}

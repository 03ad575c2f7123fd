//! End-to-end acceptance scenarios for the compiled DFAs, plus the
//! structural properties the construction guarantees: determinism, start
//! acceptance for nullable expressions, and the degenerate empty cases.

use followpos::{CompileError, compile, compile_nonempty};

#[test]
fn concat_union_star_mix() {
    // a.(b|c)*.d with explicit dots, exactly as a caller may write it.
    let dfa = compile("a.(b|c)*.d").expect("compile");
    for s in ["ad", "abd", "abcbcd"] {
        assert!(dfa.accepts(s), "{s:?} should be accepted");
    }
    for s in ["a", "abc", "ade", ""] {
        assert!(!dfa.accepts(s), "{s:?} should be rejected");
    }

    // The implicit-concatenation spelling builds the same language.
    let implicit = compile("a(b|c)*d").expect("compile");
    for s in ["ad", "abd", "abcbcd", "a", "abc", "ade", ""] {
        assert_eq!(implicit.accepts(s), dfa.accepts(s), "diverged on {s:?}");
    }
}

#[test]
fn bare_empty_word() {
    let dfa = compile("$").expect("compile");
    assert_eq!(dfa.n_states, 1, "one accepting start state");
    assert!(dfa.is_accepting(dfa.start));
    assert!(dfa.transitions.is_empty(), "no outgoing transitions");
    assert!(dfa.accepts(""));
    assert!(!dfa.accepts("a"));
}

#[test]
fn starred_union() {
    let dfa = compile("(a|b)*").expect("compile");
    for s in ["", "a", "ab", "bababa"] {
        assert!(dfa.accepts(s), "{s:?} should be accepted");
    }
    assert!(!dfa.accepts("ac"));
}

#[test]
fn unbalanced_input_never_reaches_construction() {
    assert!(
        matches!(
            compile("a)(b"),
            Err(CompileError::UnbalancedParens { .. })
        ),
        "a)(b must fail before any DFA state exists"
    );
}

#[test]
fn determinism_across_a_batch_of_expressions() {
    for expr in ["a(b|c)*d", "(a|b)*abb", "(ab|a)*", "a|$", "((a))*b"] {
        let dfa = compile(expr).expect("compile");
        let mut seen = std::collections::HashSet::new();
        for t in &dfa.transitions {
            assert!(
                seen.insert((t.from, t.symbol)),
                "{expr}: two transitions for ({}, {:?})",
                t.from,
                t.symbol
            );
            assert!(t.from < dfa.n_states && t.to < dfa.n_states);
        }
    }
}

#[test]
fn start_accepts_iff_expression_is_nullable() {
    let nullable = ["(a|b)*", "$", "a*", "a|$", "a*b*"];
    let not_nullable = ["a", "ab", "a|b", "a*b"];
    for expr in nullable {
        let dfa = compile(expr).expect("compile");
        assert!(dfa.is_accepting(dfa.start), "{expr} is nullable");
        assert!(dfa.accepts(""));
    }
    for expr in not_nullable {
        let dfa = compile(expr).expect("compile");
        assert!(!dfa.is_accepting(dfa.start), "{expr} is not nullable");
        assert!(!dfa.accepts(""));
    }
}

#[test]
fn empty_expression_degenerate_vs_strict() {
    let dfa = compile("").expect("empty input is not an error by default");
    assert_eq!(dfa.n_states, 1);
    assert!(dfa.is_accepting(dfa.start));
    assert!(dfa.transitions.is_empty());
    assert!(dfa.accepts(""));
    assert!(!dfa.accepts("a"));

    assert_eq!(
        compile_nonempty("").unwrap_err(),
        CompileError::EmptyExpression
    );
    assert!(compile_nonempty("a").is_ok());
}

#[test]
fn interior_empty_word_is_a_nullable_branch() {
    // (a|$)b: the $ branch lets b start the word.
    let dfa = compile("(a|$)b").expect("compile");
    assert!(dfa.accepts("ab"));
    assert!(dfa.accepts("b"));
    assert!(!dfa.accepts(""));
    assert!(!dfa.accepts("a"));
}

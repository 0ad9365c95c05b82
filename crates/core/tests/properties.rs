//! Property-based tests for the lexer and parser.
//!
//! 1. **Lexing is total** -- any byte sequence yields tokens ending in one EOI
//! 2. **Lexing is deterministic** -- same input, same tokens
//! 3. **Identifier runs stay whole** -- `[A-Za-z0-9_.]+` is one token
//! 4. **Parsing never panics** -- arbitrary formula-alphabet text returns
//!    `Ok` or `Err`
//! 5. **Generated formulas parse** -- grammar-shaped text always parses
//! 6. **Parsing is deterministic** -- same text, same result
//! 7. **Nesting is bounded** -- formulas nested past the limit fail with a
//!    syntax error, shallower ones parse

use proptest::prelude::*;
use qml_core::parser::MAX_NESTING_DEPTH;
use qml_core::{lex, lex_bytes, lexer::is_variable, parse, TokenKind};

// ============================================================================
// Generators
// ============================================================================

/// Text drawn from the characters the grammar cares about, plus a few
/// strangers.
fn formula_alphabet() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "¬", "∧", "∨", "→", "↔", "□", "⋄", "∀", "∃", "∄", "=", "≠", "(", ")", "[", "]", ",",
            " ", "x", "y_1", "z2", "P", "Q", "john", "&", "∈", "é",
        ]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn term() -> impl Strategy<Value = String> {
    prop_oneof![
        "[xyz]",
        "[xyz]_?[0-9]{1,3}",
        "[A-Z][a-z]{1,6}",
        "[a-w][a-z0-9.]{0,6}",
    ]
}

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        ("[A-Z][a-zA-Z]{0,5}", prop::collection::vec(term(), 1..4))
            .prop_map(|(name, args)| format!("{}({})", name, args.join(", "))),
        (term(), term()).prop_map(|(a, b)| format!("{}={}", a, b)),
        (term(), term()).prop_map(|(a, b)| format!("{} ≠ {}", a, b)),
    ]
}

/// Well-formed formulas built from the grammar.
fn formula() -> impl Strategy<Value = String> {
    atom().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (prop::sample::select(vec!["¬", "□", "⋄"]), inner.clone())
                .prop_map(|(op, f)| format!("{}{}", op, f)),
            (
                prop::sample::select(vec!["∀", "∃", "∄"]),
                "[xyz][0-9]?",
                inner.clone()
            )
                .prop_map(|(q, v, f)| format!("{}{} {}", q, v, f)),
            (
                inner.clone(),
                prop::sample::select(vec!["∧", "∨", "→", "↔"]),
                inner.clone()
            )
                .prop_map(|(a, op, b)| format!("({} {} {})", a, op, b)),
            inner.prop_map(|f| format!("[{}]", f)),
        ]
    })
}

/// One nesting level: a bracket pair, a modal prefix or a quantifier.
fn wrapper() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(vec![
        ("(", ")"),
        ("[", "]"),
        ("¬", ""),
        ("□", ""),
        ("⋄", ""),
        ("∀x ", ""),
        ("∄y ", ""),
    ])
}

/// `P(a)` wrapped in `levels` layers drawn from `wrapper()`.
fn nested_formula() -> impl Strategy<Value = (usize, String)> {
    prop::collection::vec(wrapper(), 0..(MAX_NESTING_DEPTH * 4)).prop_map(|layers| {
        let open: String = layers.iter().map(|(o, _)| *o).collect();
        let close: String = layers.iter().rev().map(|(_, c)| *c).collect();
        (layers.len(), format!("{}P(a){}", open, close))
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #[test]
    fn lexing_is_total(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let tokens = lex_bytes(&bytes);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eoi));
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eoi).count(),
            1,
            "exactly one EOI for {:?}",
            bytes,
        );
    }

    #[test]
    fn lexing_is_deterministic(input in "\\PC{0,200}") {
        prop_assert_eq!(lex(&input), lex(&input));
    }

    #[test]
    fn identifier_runs_stay_whole(word in "[A-Za-z0-9_.]{1,20}") {
        let tokens = lex(&word);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].literal, &word);
        let expected = if is_variable(&word) {
            TokenKind::Variable
        } else {
            TokenKind::Identifier
        };
        prop_assert_eq!(tokens[0].kind, expected);
    }

    #[test]
    fn parsing_never_panics(input in formula_alphabet()) {
        let _ = parse(&input);
    }

    #[test]
    fn generated_formulas_parse(input in formula()) {
        let result = parse(&input);
        prop_assert!(result.is_ok(), "{:?} failed: {:?}", input, result);
    }

    #[test]
    fn parsing_is_deterministic(input in formula_alphabet()) {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn nesting_is_bounded((levels, input) in nested_formula()) {
        let result = parse(&input);
        if levels < MAX_NESTING_DEPTH {
            prop_assert!(result.is_ok(), "{} levels failed: {:?}", levels, result);
        } else {
            let err = result.unwrap_err();
            prop_assert!(err.is_syntax());
            prop_assert!(err.to_string().contains("nested too deeply"), "{}", err);
        }
    }
}

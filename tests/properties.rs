use minnow::{
    execute,
    interpreter::{lexer::tokenize, parser::core::parse_program},
};
use proptest::prelude::*;

fn variable() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "total", "flag"]).prop_map(str::to_string)
}

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0i64..1000).prop_map(|n| n.to_string()),
                           "[a-z ]{0,6}".prop_map(|s| format!("\"{s}\"")),
                           variable()];

    leaf.prop_recursive(4, 32, 2, |inner| {
            let arithmetic = prop::sample::select(vec!["+", "-", "*", "/"]);
            let comparison = prop::sample::select(vec!["<", ">", "<=", ">=", "=="]);

            prop_oneof![(inner.clone(), arithmetic, inner.clone()).prop_map(|(l, op, r)| {
                                                                      format!("{l} {op} {r}")
                                                                  }),
                        (inner.clone(), comparison, inner.clone()).prop_map(|(l, op, r)| {
                                                                      format!("({l} {op} {r})")
                                                                  }),
                        inner.clone().prop_map(|e| format!("({e})")),
                        inner.prop_map(|e| format!("-{e}"))]
        })
}

fn statement() -> impl Strategy<Value = String> {
    let simple = prop_oneof![expression().prop_map(|e| format!("print {e}")),
                             (variable(), expression()).prop_map(|(v, e)| format!("{v} = {e}"))];

    simple.prop_recursive(3, 24, 4, |inner| {
              (expression(), prop::collection::vec(inner, 0..4)).prop_map(|(condition, body)| {
                  format!("if {condition} {{\n{}\n}}", body.join("\n"))
              })
          })
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(statement(), 0..8).prop_map(|statements| statements.join("\n"))
}

const VOCABULARY: &[&str] = &["print", "if", "{", "}", "=", "+", "-", "*", "/", "<", "<=", "==",
                              "(", ")", "x", "y", "0", "7", "\"s\"", "\n"];

proptest! {
    #[test]
    fn execution_is_repeatable(source in program()) {
        prop_assert_eq!(execute(&source), execute(&source));
    }

    #[test]
    fn generated_programs_parse(source in program()) {
        let tokens = tokenize(&source);
        prop_assert!(tokens.is_ok(), "{:?}", tokens);
        let program = parse_program(&tokens.unwrap_or_default());
        prop_assert!(program.is_ok(), "{:?}", program);
    }

    #[test]
    fn trailing_tokens_are_never_ignored(
        source in program(),
        extra in prop::sample::select(vec![")", "}", "=", "+", "<", "5", "\"s\"", "("]),
    ) {
        let source = format!("{source} {extra}");
        let tokens = tokenize(&source).unwrap_or_default();
        prop_assert!(parse_program(&tokens).is_err(), "{:?} parsed", source);
    }

    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,64}") {
        let output = execute(&source);
        prop_assert_eq!(output, execute(&source));
    }

    #[test]
    fn token_soup_is_parsed_or_rejected(
        words in prop::collection::vec(prop::sample::select(VOCABULARY.to_vec()), 0..24),
    ) {
        let source = words.join(" ");
        let tokens = tokenize(&source);
        prop_assert!(tokens.is_ok(), "{:?}", tokens);
        // Either outcome is fine; the parser must simply decide.
        let _ = parse_program(&tokens.unwrap_or_default());
    }

    #[test]
    fn integers_print_as_written(n in (i64::MIN + 1)..=i64::MAX) {
        prop_assert_eq!(execute(&format!("print {n}")), n.to_string());
    }

    #[test]
    fn division_rounds_toward_negative_infinity(a in -10_000i64..10_000, b in -100i64..100) {
        prop_assume!(b != 0);
        // Both operands are small enough for the float quotient to be exact
        // up to far less than the distance between neighbouring integers.
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let floor = (a as f64 / b as f64).floor() as i64;
        prop_assert_eq!(execute(&format!("print {a} / {b}")), floor.to_string());
    }
}

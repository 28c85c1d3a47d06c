use std::fs::{self};

use minnow::{Error, error::RuntimeError, execute, get_result};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expected)) in extract_example_pairs(&content).into_iter().enumerate() {
            count += 1;
            assert_eq!(execute(&code),
                       expected,
                       "Example {} in {:?} produced unexpected output:\n{}",
                       i + 1,
                       path,
                       code);
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Pairs every ```` ```minnow ```` block with the ```` ```output ```` block
/// that follows it.
fn extract_example_pairs(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut code: Option<String> = None;
    let mut inside: Option<&str> = None;
    let mut buf: Vec<&str> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        match inside {
            None if trimmed.starts_with("```minnow") => {
                inside = Some("minnow");
                buf.clear();
            },
            None if trimmed.starts_with("```output") => {
                inside = Some("output");
                buf.clear();
            },
            Some(kind) if trimmed.starts_with("```") => {
                inside = None;
                let block = buf.join("\n");
                if kind == "minnow" {
                    code = Some(block);
                } else if let Some(source) = code.take() {
                    pairs.push((source, block));
                }
            },
            Some(_) => buf.push(line),
            None => {},
        }
    }

    pairs
}

fn assert_output(src: &str, expected: &str) {
    match get_result(src) {
        Ok(output) => assert_eq!(output, expected, "Script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(output) => panic!("Script succeeded with {output:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn hello_world() {
    assert_eq!(execute("print \"Hello, World!\""), "Hello, World!");
}

#[test]
fn assignment_and_reassignment() {
    assert_output("x = 10\nprint x\nx = x + 5\nprint x", "10\n15");
    assert_output("x = 1\nx = \"now text\"\nprint x", "now text");
}

#[test]
fn if_with_true_condition_runs_body() {
    assert_output("x = 10\nif x > 5 {\n  print \"x is greater than 5\"\n}",
                  "x is greater than 5");
}

#[test]
fn if_with_false_condition_prints_nothing() {
    assert_eq!(execute("x = 3\nif x > 5 {\n  print \"no\"\n}"), "");
}

#[test]
fn empty_program_prints_nothing() {
    assert_eq!(execute(""), "");
    assert_eq!(execute("  \n\t\n"), "");
    assert_eq!(execute("x = 1"), "");
}

#[test]
fn floor_division() {
    assert_output("a = -7\nb = 2\nprint a / b", "-4");
    assert_output("print 7 / -2", "-4");
    assert_output("print -7 / -2", "3");
    assert_output("print -8 / 2", "-4");
    assert_output("print 0 / -5", "0");
}

#[test]
fn unbound_variable_reads_as_zero() {
    assert_output("print y", "0");
    assert_output("if missing { print \"never\" }\nprint missing + 2", "2");
}

#[test]
fn division_by_zero_is_error() {
    let result = execute("a = 1\nb = 0\nprint a / b");
    assert!(result.starts_with("Error: "), "{result}");
    assert!(result.contains("Division by zero"), "{result}");

    assert!(matches!(assert_failure("print 1 / 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
}

#[test]
fn failure_discards_earlier_output() {
    assert_eq!(execute("print \"first\"\nprint 1 / 0\nprint \"never\""),
               "Error: Runtime error on line 2: Division by zero.");
}

#[test]
fn precedence_and_associativity() {
    assert_output("print 2 + 3 * 4", "14");
    assert_output("print (2 + 3) * 4", "20");
    assert_output("print 100 / 10 / 5", "2");
    assert_output("print 10 - 2 - 3", "5");
    assert_output("print 1 + 2 < 2 * 2", "true");
    assert_output("print --5", "5");
    assert_output("print -2 * -3", "6");
}

#[test]
fn string_concatenation() {
    assert_output("print \"ab\" + \"cd\"", "abcd");
    assert_output("s = \"a\"\ns = s + s\ns = s + s\nprint s", "aaaa");
}

#[test]
fn strings_are_not_escaped() {
    assert_output(r#"print "back\slash""#, r"back\slash");
    assert_output("print \"two\nlines\"", "two\nlines");
}

#[test]
fn mixed_operand_types_are_rejected() {
    for src in ["print \"a\" + 1",
                "print 1 + \"a\"",
                "print \"a\" - \"b\"",
                "print \"a\" * 2",
                "print (1 < 2) + 1",
                "print -\"a\""]
    {
        let result = execute(src);
        assert!(result.contains("Unsupported operand types"), "{src} => {result}");
    }
}

#[test]
fn comparisons() {
    assert_output("print 2 < 3\nprint 3 > 2\nprint 2 <= 2\nprint 3 >= 4\nprint 2 == 2",
                  "true\ntrue\ntrue\nfalse\ntrue");
    assert_output("print \"apple\" < \"banana\"\nprint \"b\" == \"b\"", "true\ntrue");
    assert_output("print (1 < 2) == (2 < 3)\nprint (1 > 2) < (1 < 2)", "true\ntrue");
}

#[test]
fn cross_type_equality_is_false() {
    assert_output("print 1 == \"1\"", "false");
    assert_output("print 1 == (1 == 1)", "false");
    assert_output("print \"true\" == (1 == 1)", "false");
}

#[test]
fn cross_type_ordering_is_error() {
    let result = execute("print \"a\" < 1");
    assert!(result.starts_with("Error: "), "{result}");
    assert!(matches!(assert_failure("print 1 >= \"1\""),
                     Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn truthiness() {
    assert_output("if 0 { print 1 }\nif 2 { print 2 }\nif -1 { print 3 }", "2\n3");
    assert_output("if \"\" { print 1 }\nif \"x\" { print 2 }", "2");
    assert_output("if 1 == 2 { print 1 }\nif 2 == 2 { print 2 }", "2");
}

#[test]
fn if_body_shares_variables() {
    assert_output("if 1 { x = 5 }\nprint x", "5");
    assert_output("x = 1\nif x {\n  x = x + 1\n  print x\n}\nprint x", "2\n2");
    assert_output("if 1 {\n  a = 1\n  if a {\n    b = a + 1\n  }\n  print b\n}\nprint a + b",
                  "2\n3");
}

#[test]
fn keywords_are_reserved() {
    assert!(execute("print = 1").starts_with("Error: "));
    assert!(execute("if = 1").starts_with("Error: "));
    assert_output("printer = 3\niffy = 4\nprint printer + iffy", "7");
}

#[test]
fn integer_overflow_is_error() {
    let result = execute("print 9223372036854775807 + 1");
    assert!(result.contains("overflow"), "{result}");
    assert!(execute("print -9223372036854775807 - 2").contains("overflow"));
    assert!(execute("print 4611686018427387904 * 2").contains("overflow"));
    assert_output("print -9223372036854775807 - 1", "-9223372036854775808");
}

#[test]
fn literal_too_large_is_error() {
    let result = execute("print 99999999999999999999");
    assert_eq!(result, "Error: Syntax error on line 1: Literal is too large.");
}

#[test]
fn unknown_character_is_error_not_truncation() {
    assert_eq!(execute("print 1\nprint 2 $ 3"),
               "Error: Syntax error on line 2: Unexpected character '$'.");
    assert!(execute("print 1 ; print 2").starts_with("Error: "));
    assert!(execute("print \"unterminated").starts_with("Error: "));
}

#[test]
fn unterminated_string_is_reported_on_one_line() {
    let result = execute("print 1\nprint \"abc\nx = 2\nprint x");
    assert_eq!(result, "Error: Syntax error on line 2: Unexpected character '\"'.");
    assert_eq!(result.lines().count(), 1);

    assert_eq!(execute("print \"abc\nx = 2").lines().count(), 1);
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 100;
    let source = format!("print {}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_output(&source, "1");

    let source = format!("print {}1", "-".repeat(depth));
    assert_output(&source, "1");
}

#[test]
fn most_negative_integer_is_not_a_literal() {
    assert_eq!(execute("print -9223372036854775808"),
               "Error: Syntax error on line 1: Literal is too large.");
    assert_output("x = -9223372036854775807 - 1\nprint x", "-9223372036854775808");
}

#[test]
fn comparisons_do_not_chain() {
    assert_eq!(execute("print 1 < 2 < 3"),
               "Error: Syntax error on line 1: Unexpected token COMPARE.");
    assert!(execute("print (1 < 2 < 3)").starts_with("Error: "));
}

#[test]
fn syntax_errors() {
    assert_eq!(execute("print"), "Error: Syntax error: Unexpected end of input, expected expression.");
    assert_eq!(execute("x"), "Error: Syntax error: Unexpected end of input, expected ASSIGN.");
    assert_eq!(execute("x = 1\n5"), "Error: Syntax error on line 2: Unexpected token NUMBER.");
    assert_eq!(execute("if 1 print 2"),
               "Error: Syntax error on line 1: Expected LBRACE, found PRINT.");
    assert_eq!(execute("print (1 + 2"),
               "Error: Syntax error: Unexpected end of input, expected RPAREN.");
    assert_eq!(execute("print 1\n}"), "Error: Syntax error on line 2: Unexpected token RBRACE.");
    assert_eq!(execute("x = = 1"), "Error: Syntax error on line 1: Unexpected token ASSIGN.");
}

#[test]
fn syntax_error_prevents_any_execution() {
    // The parse error on line 3 is reported even though line 2 would fail at
    // runtime: nothing runs until the whole program parses.
    assert_eq!(execute("print 1\nprint 1 / 0\nprint )"),
               "Error: Syntax error on line 3: Unexpected token RPAREN.");
}

#[test]
fn runs_are_independent() {
    assert_eq!(execute("x = 5\nprint x"), "5");
    assert_eq!(execute("print x"), "0");
}

use std::fs::{self};

use decicalc::{
    error::{ParseErrorKind, RuntimeError, diagnostic::Error},
    evaluate_line, evaluate_line_with,
    interpreter::{
        evaluator::core::{Context, MAX_DIGITS},
        parser::core::MAX_DEPTH,
    },
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (input, expected) in extract_examples(&content) {
            count += 1;
            match evaluate_line(&input) {
                Ok(result) => assert_eq!(result, expected, "example `{input}` in {path:?}"),
                Err(e) => panic!("Example `{input}` in {path:?} failed:\n{e}"),
            }
        }
    }

    assert!(count > 0, "No decicalc examples found in docs");
}

/// Collects the `input => expected` lines of every ```` ```decicalc ```` block.
fn extract_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```decicalc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((input, expected)) = line.split_once("=>") {
            examples.push((input.trim().to_string(), expected.trim().to_string()));
        }
    }

    examples
}

fn assert_result(src: &str, expected: &str) {
    match evaluate_line(src) {
        Ok(result) => assert_eq!(result, expected, "evaluating `{src}`"),
        Err(e) => panic!("`{src}` failed:\n{e}"),
    }
}

fn parse_failure(src: &str) -> ParseErrorKind {
    match evaluate_line(src) {
        Ok(result) => panic!("`{src}` evaluated to {result} but was expected to fail"),
        Err(diagnostic) => match diagnostic.error() {
            Error::Parse(e) => e.kind.clone(),
            Error::Runtime(e) => panic!("`{src}` failed at runtime instead of parsing: {e}"),
        },
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match evaluate_line(src) {
        Ok(result) => panic!("`{src}` evaluated to {result} but was expected to fail"),
        Err(diagnostic) => match diagnostic.error() {
            Error::Runtime(e) => e.clone(),
            Error::Parse(e) => panic!("`{src}` failed to parse: {e}"),
        },
    }
}

#[test]
fn integers_are_grouped_in_thousands() {
    assert_result("1234567", "1,234,567");
    assert_result("999", "999");
    assert_result("1000", "1,000");
    assert_result("-1000000", "-1,000,000");
}

#[test]
fn operators_associate_left() {
    assert_result("10-3-2", "5");
    assert_result("2**3**2", "64");
    assert_result("64/4/2", "8");
}

#[test]
fn precedence_and_grouping() {
    assert_result("2+3*4", "14");
    assert_result("(2+3)*4", "20");
    assert_result("2*3**2", "18");
    assert_result("((1))", "1");
}

#[test]
fn unary_minus_binds_to_the_base() {
    assert_result("-2**2", "4");
    assert_result("-(2**2)", "-4");
    assert_result("3*-(1+1)", "-6");
    assert_result("1--1", "2");
}

#[test]
fn decimal_arithmetic_is_exact() {
    assert_result("0.1+0.2", "0.3");
    assert_result("1,234.50", "1,234.5");
    assert_result("1,234.50 * 2", "2,469");
    assert_result(".5 * 4", "2");
    assert_result("1.1 * 1.1", "1.21");
}

#[test]
fn division_rounds_to_the_division_scale() {
    assert_result("1/4", "0.25");
    assert_result("1/3", "0.33333333333333333333");
    assert_result("2/3", "0.66666666666666666667");
    assert_result("1,000,000 / 1,000", "1,000");

    let context = Context::new().with_division_scale(5);
    assert_eq!(evaluate_line_with(&context, "1/7").unwrap(), "0.14286");
}

#[test]
fn integer_exponents() {
    assert_result("2**-2", "0.25");
    assert_result("0**0", "1");
    assert_result("1.5**2", "2.25");
    assert_result("10**2.0", "100");
}

#[test]
fn blank_space_between_tokens_is_accepted() {
    assert_result("  1  +\t2 ", "3");
    assert_result("1,234 *  ( 2 - 1 )", "1,234");
}

#[test]
fn division_by_zero_names_the_divisor() {
    assert_eq!(runtime_failure("5/0"),
               RuntimeError::DivisionByZero { divisor: "0".to_string(),
                                              column:  3, });
    assert_eq!(runtime_failure("1/(3-3)"),
               RuntimeError::DivisionByZero { divisor: "(3 - 3)".to_string(),
                                              column:  4, });
    assert!(matches!(runtime_failure("0**-1"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn unsupported_exponents_are_rejected() {
    assert_eq!(runtime_failure("2**0.5"),
               RuntimeError::UnsupportedExponent { exponent: "0.5".to_string(),
                                                   column:   4, });
    assert!(matches!(runtime_failure("2**1000001"), RuntimeError::ExponentTooLarge { .. }));
}

#[test]
fn malformed_lines_are_parse_errors() {
    assert!(matches!(parse_failure("(1+2"), ParseErrorKind::ExpectedClosingParen { .. }));
    assert!(matches!(parse_failure("1,23"), ParseErrorKind::UnexpectedCharacter { .. }));
    assert!(matches!(parse_failure("1 + "), ParseErrorKind::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure("1 2"), ParseErrorKind::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_failure("--2"), ParseErrorKind::UnexpectedToken { .. }));
    assert_eq!(parse_failure("   "), ParseErrorKind::EmptyInput);
}

#[test]
fn diagnostic_points_at_the_failure() {
    let diagnostic = evaluate_line("5/0").unwrap_err();

    assert_eq!(diagnostic.to_string(),
               "5/0\n  ^\nError at column 3: Division by zero: '0' evaluates to 0.");
}

#[test]
fn parse_diagnostic_lists_the_rule_trace() {
    let rendered = evaluate_line("(1+2").unwrap_err().to_string();

    assert!(rendered.starts_with("(1+2\n    ^\nError at column 5:"));
    assert!(rendered.contains("while parsing primary starting at column 1"));
}

#[test]
fn long_chains_fail_per_line() {
    assert_result(&vec!["1"; MAX_DEPTH].join("+"), "1,000");
    assert_eq!(parse_failure(&vec!["1"; MAX_DEPTH + 1].join("+")),
               ParseErrorKind::TooDeep { max: MAX_DEPTH });
    assert_eq!(parse_failure(&vec!["1"; 50_000].join("+")),
               ParseErrorKind::TooDeep { max: MAX_DEPTH });
}

#[test]
fn deep_nesting_fails_per_line() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_result(&nested(100), "1");
    assert_eq!(parse_failure(&nested(6_000)), ParseErrorKind::TooDeep { max: MAX_DEPTH });
}

#[test]
fn chained_powers_are_bounded_by_result_size() {
    assert!(matches!(runtime_failure("9**99999**99999"),
                     RuntimeError::ResultTooLarge { max: MAX_DIGITS, column: 1, .. }));

    let context = Context::new().with_max_digits(100);
    assert!(evaluate_line_with(&context, "2**300").is_err());
    assert_eq!(evaluate_line_with(&context, "2**64").unwrap(),
               "18,446,744,073,709,551,616");
}

#[test]
fn large_scales_normalize_quickly() {
    assert_result("0.5**100000 * 2**100000", "1");
}

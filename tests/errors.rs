mod cases;

use confl::{Error, EvalError, load};
use pretty_assertions::assert_eq;

/// Comfortably past the nesting limit.
const DEEP: usize = confl::ast::builder::MAX_NESTING_DEPTH + 10;

test_case! {
    name: toml_style_assignment,
    input: { "port = 8080" },
    error: { Error::Syntax(ParseError { kind: ParseErrorKind::UnexpectedToken { .. }, .. }) },
}

test_case! {
    name: missing_value,
    input: { "port:" },
    error: { Error::Syntax(ParseError { kind: ParseErrorKind::UnexpectedToken { .. }, .. }) },
}

test_case! {
    name: uppercase_name,
    input: { "Port: 1" },
    error: { Error::Syntax(_) },
}

test_case! {
    name: keyword_as_name,
    input: { "struct: 1" },
    error: { Error::Syntax(_) },
}

test_case! {
    name: decimal_without_exponent,
    input: { "ratio: 1.5" },
    error: { Error::Syntax(_) },
}

test_case! {
    name: unterminated_string,
    input: { "name: \"open" },
    error: { Error::Syntax(ParseError { kind: ParseErrorKind::UnterminatedString, .. }) },
}

test_case! {
    name: integer_out_of_range,
    input: { "big: 9223372036854775808" },
    error: { Error::Syntax(ParseError { kind: ParseErrorKind::InvalidNumber { .. }, .. }) },
}

test_case! {
    name: duplicate_top_level_name,
    input: { "a: 1\nb: 2\na: 3" },
    error: { Error::Semantic(EvalError::DuplicateName { .. }) },
}

test_case! {
    name: duplicate_even_with_equal_values,
    input: { "a: 1\na: 1" },
    error: { Error::Semantic(EvalError::DuplicateName { .. }) },
}

test_case! {
    name: deeply_nested_arrays,
    input: { &format!("a: {}1{}", "[".repeat(DEEP), "]".repeat(DEEP)) },
    error: { Error::Syntax(ParseError { kind: ParseErrorKind::NestingTooDeep { .. }, .. }) },
}

test_case! {
    name: deeply_nested_records,
    input: { &format!("a: {}1{}", "struct { x = ".repeat(DEEP), " }".repeat(DEEP)) },
    error: { Error::Syntax(ParseError { kind: ParseErrorKind::NestingTooDeep { .. }, .. }) },
}

test_case! {
    name: deeply_nested_parentheses,
    input: { &format!("a: !({}1{})", "(".repeat(DEEP), ")".repeat(DEEP)) },
    error: { Error::Syntax(ParseError { kind: ParseErrorKind::NestingTooDeep { .. }, .. }) },
}

test_case! {
    name: deeply_nested_mod_calls,
    input: { &format!("a: !({}7{})", "mod(".repeat(DEEP), ", 2)".repeat(DEEP)) },
    error: { Error::Syntax(ParseError { kind: ParseErrorKind::NestingTooDeep { .. }, .. }) },
}

test_case! {
    name: integer_overflow_in_expression,
    input: { "big: 9223372036854775807\nx: !(big + 1)" },
    error: { Error::Semantic(EvalError::Overflow { .. }) },
}

test_case! {
    name: float_overflow_in_expression,
    input: { "a: 1e308\nb: !(a + a)" },
    error: { Error::Semantic(EvalError::Overflow { .. }) },
}

#[test]
fn moderate_nesting_loads() {
    let source = format!("a: {}1{}", "struct { x = [".repeat(20), "] }".repeat(20));
    let document = load(&source).unwrap();
    let mut value = &document["a"];
    let mut levels = 0;
    while let Some(record) = value.as_record() {
        value = &record["x"].as_array().unwrap()[0];
        levels += 1;
    }
    assert_eq!(levels, 20);
    assert_eq!(value.as_int(), Some(1));
}

#[test]
fn syntax_error_reports_line_and_column() {
    let Err(Error::Syntax(err)) = load("a: 1\nb: 2\nc  3") else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.position(), (3, 4));
}

#[test]
fn duplicate_points_at_both_declarations() {
    let Err(Error::Semantic(EvalError::DuplicateName { name, span, first })) =
        load("a: 1\nb: 2\na: 3")
    else {
        panic!("expected a duplicate name error");
    };
    assert_eq!(name, "a");
    assert_eq!(span.start(), 10);
    assert_eq!(first.start(), 0);
}

#[test]
fn unknown_constant_names_the_reference() {
    let err = load("x: !(y + 1)").unwrap_err();
    assert_eq!(err.to_string(), "semantic error: unknown constant `y`");
    assert_eq!(err.span().0, 5..6);
}

#[test]
fn first_error_aborts_evaluation() {
    // The later duplicate is never reached.
    let err = load("x: !(missing + 1)\na: 1\na: 2").unwrap_err();
    assert!(matches!(
        err,
        Error::Semantic(EvalError::UnknownConstant { .. })
    ));
}

#[test]
fn syntax_errors_win_over_semantic_errors() {
    // Parsing finishes before any name is resolved.
    let err = load("x: !(missing + 1)\ny 2").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
}

#[test]
fn diagnostic_codes() {
    let code = |source: &str| load(source).unwrap_err().to_diagnostic().code;
    assert_eq!(code("a = 1"), "P001");
    assert_eq!(code("a: \"x"), "P002");
    assert_eq!(code("a: [1"), "P003");
    assert_eq!(code("a: 99999999999999999999"), "P004");
    assert_eq!(code("a: 1\na: 2"), "E001");
    assert_eq!(code("a: !(b)"), "E002");
    assert_eq!(code("s: \"x\"\na: !(s)"), "E003");
    assert_eq!(code("a: !(mod(1, 0))"), "E004");
    assert_eq!(code("f: 1e0\na: !(mod(f, 1))"), "E005");
    assert_eq!(code("f: 1e308\na: !(f + f)"), "E006");
    assert_eq!(code(&format!("a: {}{}", "[".repeat(DEEP), "]".repeat(DEEP))), "P005");
}

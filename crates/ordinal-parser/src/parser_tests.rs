//! Unit tests for the directive parser
//!
//! These tests verify that every directive form parses to the expected
//! [`Directive`] and that malformed input is reported with the right code.

use ordinal_core::{directive::Directive, weight::Weight};

use crate::{
    error::{Diagnostic, ErrorCode},
    parse, parse_lenient, parser,
};

/// Helper function to parse a directive and assert success
fn assert_parses_to(source: &str, expected: Directive) {
    match parse(source) {
        Ok(directive) => assert_eq!(directive, expected, "source: {source:?}"),
        Err(err) => panic!("Expected {source:?} to parse, but got error: {err}"),
    }
}

/// Helper function to parse a directive and return its single diagnostic
fn parse_failure(source: &str) -> Diagnostic {
    match parser::parse_directive(source) {
        Ok(directive) => panic!("Expected {source:?} to fail, but it parsed as {directive:?}"),
        Err(diag) => diag,
    }
}

fn assert_fails_with(source: &str, code: ErrorCode) {
    let diag = parse_failure(source);
    assert_eq!(diag.code(), Some(code), "source: {source:?}, got: {diag}");
}

#[cfg(test)]
mod keyword_tests {
    use super::*;

    #[test]
    fn test_start() {
        assert_parses_to("start", Directive::Start(0));
        assert_parses_to("start 52", Directive::Start(52));
        assert_parses_to("start -1", Directive::Start(-1));
    }

    #[test]
    fn test_end() {
        assert_parses_to("end", Directive::End(0));
        assert_parses_to("end 17", Directive::End(17));
    }

    #[test]
    fn test_before() {
        assert_parses_to("before second", Directive::Before("second".into(), 0));
        assert_parses_to("before third 12", Directive::Before("third".into(), 12));
    }

    #[test]
    fn test_after() {
        assert_parses_to("after first", Directive::After("first".into(), 0));
        assert_parses_to("after first 12", Directive::After("first".into(), 12));
    }

    #[test]
    fn test_reference_may_contain_punctuation() {
        assert_parses_to(
            "before Neos.Fusion:Tag",
            Directive::Before("Neos.Fusion:Tag".into(), 0),
        );
        assert_parses_to("after 42", Directive::After("42".into(), 0));
    }

    #[test]
    fn test_keyword_as_reference() {
        assert_parses_to("before end", Directive::Before("end".into(), 0));
        assert_parses_to("after start 3", Directive::After("start".into(), 3));
    }
}

#[cfg(test)]
mod numeric_tests {
    use super::*;

    fn number(value: f64) -> Directive {
        Directive::Numeric(Weight::new(value).unwrap())
    }

    #[test]
    fn test_integers() {
        assert_parses_to("5", number(5.0));
        assert_parses_to("17", number(17.0));
        assert_parses_to("-3", number(-3.0));
        assert_parses_to("+8", number(8.0));
    }

    #[test]
    fn test_fraction_is_kept() {
        assert_parses_to("17.5", number(17.5));
        assert_parses_to("-0.5", number(-0.5));
        assert_parses_to("0.25", number(0.25));
    }

    #[test]
    fn test_large_number_is_valid() {
        assert_parses_to("99999999999999999999", number(99999999999999999999.0));
    }

    #[test]
    fn test_unrepresentable_number_is_invalid() {
        assert_fails_with(&"9".repeat(400), ErrorCode::E005);
    }

    #[test]
    fn test_sign_without_digits() {
        assert_fails_with("-", ErrorCode::E005);
        assert_fails_with("+.5", ErrorCode::E005);
    }

    #[test]
    fn test_dangling_decimal_point() {
        assert_fails_with("17.", ErrorCode::E004);
    }
}

#[cfg(test)]
mod whitespace_tests {
    use super::*;

    #[test]
    fn test_empty_is_unspecified() {
        assert_parses_to("", Directive::Unspecified);
        assert_parses_to("   ", Directive::Unspecified);
        assert_parses_to("\t\n", Directive::Unspecified);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_parses_to("  end 3  ", Directive::End(3));
        assert_parses_to("\tstart", Directive::Start(0));
    }

    #[test]
    fn test_repeated_separators() {
        assert_parses_to("before   second \t 4", Directive::Before("second".into(), 4));
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_unknown_keyword() {
        assert_fails_with("middle", ErrorCode::E001);
        assert_fails_with("Start", ErrorCode::E001);
        assert_fails_with("startled", ErrorCode::E001);
    }

    #[test]
    fn test_missing_reference() {
        assert_fails_with("before", ErrorCode::E002);
        assert_fails_with("after", ErrorCode::E002);
    }

    #[test]
    fn test_invalid_priority() {
        assert_fails_with("start first", ErrorCode::E003);
        assert_fails_with("before second high", ErrorCode::E003);
        assert_fails_with("end 99999999999999999999999", ErrorCode::E003);
    }

    #[test]
    fn test_trailing_input() {
        assert_fails_with("start 5x", ErrorCode::E004);
        assert_fails_with("after first 12 13", ErrorCode::E004);
        assert_fails_with("5 apples", ErrorCode::E004);
    }

    #[test]
    fn test_unknown_keyword_span_covers_directive() {
        let diag = parse_failure("  middle 3");
        let label = &diag.labels()[0];

        assert!(label.is_primary());
        assert_eq!(label.span().range(), 2..10);
        assert!(diag.help().is_some());
    }

    #[test]
    fn test_trailing_input_span() {
        let diag = parse_failure("start 5x");
        let labels = diag.labels();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].span().range(), 7..8);
        assert!(labels[1].is_secondary());
        assert_eq!(labels[1].span().range(), 0..7);
    }

    #[test]
    fn test_names_that_are_not_single_tokens_cannot_be_written() {
        let spaced = Directive::Before("a b".into(), 0).to_string();
        assert_fails_with(&spaced, ErrorCode::E003);

        let empty = Directive::After(String::new(), 0).to_string();
        assert_fails_with(&empty, ErrorCode::E002);
    }

    #[test]
    fn test_strict_parse_is_error_severity() {
        let err = parse("nowhere").unwrap_err();

        assert!(err.diagnostic().severity().is_error());
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E001));
    }
}

#[cfg(test)]
mod lenient_tests {
    use super::*;

    #[test]
    fn test_valid_directive_has_no_warning() {
        let (directive, warning) = parse_lenient("after first 12");

        assert_eq!(directive, Directive::After("first".into(), 12));
        assert!(warning.is_none());
    }

    #[test]
    fn test_malformed_directive_degrades_to_unspecified() {
        let (directive, warning) = parse_lenient("before");

        assert_eq!(directive, Directive::Unspecified);
        let warning = warning.expect("malformed directive should produce a warning");
        assert!(warning.severity().is_warning());
        assert_eq!(warning.code(), Some(ErrorCode::E002));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn name_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z_][a-zA-Z0-9_.:-]{0,12}"
    }

    fn priority_strategy() -> impl Strategy<Value = i64> {
        -1_000_000i64..1_000_000
    }

    fn directive_strategy() -> impl Strategy<Value = Directive> {
        prop_oneof![
            priority_strategy().prop_map(Directive::Start),
            priority_strategy().prop_map(Directive::End),
            (name_strategy(), priority_strategy()).prop_map(|(n, p)| Directive::Before(n, p)),
            (name_strategy(), priority_strategy()).prop_map(|(n, p)| Directive::After(n, p)),
            (-1e6f64..1e6).prop_map(|value| Directive::Numeric(Weight::new(value).unwrap())),
            Just(Directive::Unspecified),
        ]
    }

    proptest! {
        #[test]
        fn lenient_parse_never_panics(source in ".{0,40}") {
            let (directive, warning) = parse_lenient(&source);
            if warning.is_some() {
                prop_assert_eq!(directive, Directive::Unspecified);
            }
        }

        #[test]
        fn display_parses_back(directive in directive_strategy()) {
            let text = directive.to_string();
            let parsed = parse(&text).map_err(|err| TestCaseError::fail(err.to_string()))?;
            prop_assert_eq!(parsed, directive);
        }
    }
}

//! Whole-string validator tests
//!
//! Accepted and rejected path corpus for the scanner.

use docpath_core::error::SyntaxViolation;
use docpath_core::{ErrorKind, PathError, is_valid_path, validate_path};

const ACCEPTED: &[&str] = &[
    "$",
    "$.user",
    "$.user.name",
    "$._private",
    "$.a1.B2.c_3",
    "$[0]",
    "$[0][1][2]",
    "$[007]",
    "$[18446744073709551616]",
    "$.*",
    "$.*.name",
    "$[*]",
    "$[*][*]",
    "$.items[*].id",
    "$**.price",
    "$.**.price",
    "$.catalog.**.price",
    "$**[0]",
    "$**[*]",
    "$**.*",
    "$.a**.b",
    "$**.**.a",
    "$.store.book[0].**.title",
];

#[test]
fn accepts_the_valid_corpus() {
    for input in ACCEPTED {
        assert!(is_valid_path(input), "expected {input:?} to be accepted");
        assert!(validate_path(input).is_ok(), "expected {input:?} to validate");
    }
}

fn violation(input: &str) -> SyntaxViolation {
    match validate_path(input) {
        Err(PathError::InvalidPathSyntax { violation, .. }) => violation,
        other => panic!("expected syntax error for {input:?}, got {other:?}"),
    }
}

#[test]
fn rejects_rootless_input() {
    assert_eq!(violation(""), SyntaxViolation::MissingRoot);
    assert_eq!(violation("user.name"), SyntaxViolation::MissingRoot);
    assert_eq!(violation(".user"), SyntaxViolation::MissingRoot);
    assert_eq!(violation("[0]"), SyntaxViolation::MissingRoot);
}

#[test]
fn rejects_empty_member_names() {
    assert_eq!(violation("$.user..name"), SyntaxViolation::EmptyIdentifier);
    assert_eq!(violation("$."), SyntaxViolation::EmptyIdentifier);
    assert_eq!(violation("$.a."), SyntaxViolation::EmptyIdentifier);
    assert_eq!(violation("$.."), SyntaxViolation::EmptyIdentifier);
}

#[test]
fn rejects_illegal_member_names() {
    assert_eq!(violation("$.1x"), SyntaxViolation::InvalidIdentifierStart('1'));
    assert_eq!(violation("$.-a"), SyntaxViolation::InvalidIdentifierStart('-'));
    assert_eq!(violation("$.a-b"), SyntaxViolation::UnexpectedCharacter('-'));
    assert_eq!(violation("$.a b"), SyntaxViolation::UnexpectedCharacter(' '));
    assert_eq!(violation("$.a$"), SyntaxViolation::UnexpectedCharacter('$'));
}

#[test]
fn rejects_malformed_indices() {
    assert_eq!(violation("$[]"), SyntaxViolation::EmptyIndex);
    assert_eq!(violation("$[-1]"), SyntaxViolation::SignedIndex);
    assert_eq!(violation("$[+1]"), SyntaxViolation::SignedIndex);
    assert_eq!(violation("$[abc]"), SyntaxViolation::InvalidIndexCharacter('a'));
    assert_eq!(violation("$[1.5]"), SyntaxViolation::InvalidIndexCharacter('.'));
    assert_eq!(violation("$[0"), SyntaxViolation::UnterminatedBracket);
    assert_eq!(violation("$[*"), SyntaxViolation::UnterminatedBracket);
    assert_eq!(violation("$[*0]"), SyntaxViolation::InvalidIndexCharacter('0'));
    assert_eq!(violation("$['a']"), SyntaxViolation::InvalidIndexCharacter('\''));
}

#[test]
fn rejects_stray_characters_between_legs() {
    assert_eq!(violation("$]"), SyntaxViolation::UnexpectedCharacter(']'));
    assert_eq!(violation("$5"), SyntaxViolation::UnexpectedCharacter('5'));
    assert_eq!(violation("$user"), SyntaxViolation::UnexpectedCharacter('u'));
    assert_eq!(violation("$[0]x"), SyntaxViolation::UnexpectedCharacter('x'));
    assert_eq!(violation("$ "), SyntaxViolation::UnexpectedCharacter(' '));
}

#[test]
fn rejects_unsupported_jsonpath_syntax() {
    assert!(!is_valid_path("$..name"));
    assert!(!is_valid_path("$[0:2]"));
    assert!(!is_valid_path("$[?(@.price < 10)]"));
    assert!(!is_valid_path("$[0,1]"));
    assert!(!is_valid_path("$['name']"));
}

#[test]
fn recursive_descent_needs_a_following_leg() {
    assert_eq!(violation("$**"), SyntaxViolation::DanglingRecursiveDescent);
    assert_eq!(violation("$.**"), SyntaxViolation::DanglingRecursiveDescent);
    assert_eq!(violation("$.a.**"), SyntaxViolation::DanglingRecursiveDescent);
    assert_eq!(violation("$**.**"), SyntaxViolation::DanglingRecursiveDescent);
}

#[test]
fn recursive_descent_is_matched_greedily() {
    assert_eq!(violation("$.**price"), SyntaxViolation::UnexpectedCharacter('p'));
    assert_eq!(violation("$.***.a"), SyntaxViolation::LoneAsterisk);
    assert_eq!(violation("$*"), SyntaxViolation::LoneAsterisk);
    assert_eq!(violation("$*.a"), SyntaxViolation::LoneAsterisk);
}

#[test]
fn rejects_non_ascii_input() {
    assert!(!is_valid_path("$.naïve"));
    assert!(!is_valid_path("$.名前"));
    assert!(!is_valid_path("＄.a"));
}

#[test]
fn syntax_errors_carry_input_and_position() {
    let error = validate_path("$.user..name").expect_err("double dot is invalid");
    assert_eq!(error.kind(), ErrorKind::Syntax);
    match error {
        PathError::InvalidPathSyntax { input, position, .. } => {
            assert_eq!(input, "$.user..name");
            assert_eq!(position, 7);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

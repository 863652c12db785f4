//! Property tests for parsing and the combinators

use docpath_core::{Path, PathError, is_valid_identifier, is_valid_path};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Member(String),
    Index(i64),
    Wildcard,
    Descent(String),
}

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,12}"
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        identifier().prop_map(Step::Member),
        (0..=i64::MAX).prop_map(Step::Index),
        Just(Step::Wildcard),
        identifier().prop_map(Step::Descent),
    ]
}

fn apply(path: &Path, step: &Step) -> Path {
    match step {
        Step::Member(key) => path.member(key).expect("generated identifier is valid"),
        Step::Index(index) => path.array_element(*index).expect("generated index is valid"),
        Step::Wildcard => path.wildcard(),
        Step::Descent(key) => path
            .recursive_descent(key)
            .expect("generated identifier is valid"),
    }
}

/// Path text mixing dotted and dotless recursive descent
fn path_text() -> impl Strategy<Value = String> {
    "\\$(\\.[a-z]{1,3}|\\.\\*|\\[[0-9]{1,2}\\]|\\[\\*\\]|\\.?\\*\\*\\.[a-z]{1,3}|\\.?\\*\\*\\[[0-9]\\]){0,5}"
}

proptest! {
    #[test]
    fn combinator_output_reparses_equal(steps in prop::collection::vec(step(), 0..24)) {
        let built = steps.iter().fold(Path::ROOT, |path, step| apply(&path, step));
        let reparsed = Path::parse(built.as_str());
        prop_assert_eq!(reparsed, Ok(built));
    }

    #[test]
    fn accepted_text_round_trips(text in "\\$(\\.[a-z_]{1,4}|\\.\\*|\\[[0-9]{1,3}\\]|\\[\\*\\]|\\.\\*\\*\\.[a-z]{1,3}){0,8}") {
        let path = Path::parse(&text);
        prop_assert!(path.is_ok(), "expected {:?} to parse", text);
        prop_assert!(is_valid_path(&text));
        prop_assert_eq!(path.map(Path::into_string), Ok(text));
    }

    #[test]
    fn joined_paths_reparse(
        left in path_text(),
        right in path_text(),
    ) {
        prop_assume!(is_valid_path(&left) && is_valid_path(&right));
        let left = Path::parse(&left).expect("checked above");
        let right = Path::parse(&right).expect("checked above");
        let joined = left.join(&right);
        prop_assert_eq!(Path::parse(joined.as_str()), Ok(joined.clone()));
        prop_assert_eq!(joined.depth(), left.depth() + right.depth());
    }

    #[test]
    fn predicate_agrees_with_parse(text in "\\PC{0,24}") {
        prop_assert_eq!(is_valid_path(&text), Path::parse(&text).is_ok());
    }

    #[test]
    fn prefixed_arbitrary_text_agrees_with_parse(text in "\\$[.\\[\\]*a-c0-9]{0,16}") {
        prop_assert_eq!(is_valid_path(&text), Path::parse(&text).is_ok());
    }

    #[test]
    fn negative_indices_are_rejected(index in i64::MIN..0) {
        prop_assert_eq!(
            Path::ROOT.array_element(index),
            Err(PathError::InvalidIndex { index })
        );
    }

    #[test]
    fn non_negative_indices_are_accepted(index in 0..=i64::MAX) {
        let path = Path::ROOT.array_element(index);
        prop_assert_eq!(path.map(Path::into_string), Ok(format!("$[{index}]")));
    }

    #[test]
    fn member_accepts_exactly_the_identifiers(key in "\\PC{0,8}") {
        prop_assert_eq!(Path::ROOT.member(&key).is_ok(), is_valid_identifier(&key));
    }
}

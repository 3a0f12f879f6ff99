use super::*;
use rstest::rstest;
use strum::IntoEnumIterator;

#[rstest]
#[case("error", Level::Error)]
#[case("ERR", Level::Error)]
#[case("warn", Level::Warning)]
#[case("Warning", Level::Warning)]
#[case("i", Level::Info)]
#[case("dbg", Level::Debug)]
#[case("DEBUG", Level::Debug)]
fn test_level_from_str(#[case] input: &str, #[case] expected: Level) {
    assert_eq!(Level::from_str(input, true).unwrap(), expected);
}

#[test]
fn test_level_from_invalid_str() {
    assert!(Level::from_str("verbose", true).is_err());
}

#[test]
fn test_only_debug_is_gated() {
    let gated: Vec<_> = Level::iter().filter(|level| level.is_gated()).collect();
    assert_eq!(gated, vec![Level::Debug]);
}

#[test]
fn test_level_as_ref() {
    assert_eq!(Level::Warning.as_ref(), "warning");
    assert_eq!(Level::Debug.as_ref(), "debug");
}

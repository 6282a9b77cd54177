use matcha::{
    assert_that, contains_bytes, contains_string, ends_with, equal_ignoring_case, starts_with,
    Matcher,
};

mod util;

#[test]
fn contains_string_finds_substrings() {
    assert_that("hello world", contains_string("lo wo"));
    assert_that(&"hello world".to_string(), contains_string("hello"));
    assert!(!contains_string("goodbye").matches("hello world"));
}

#[test]
fn contains_string_failure_message() {
    let message = util::capture_panic_message(|| {
        assert_that("hello world", contains_string("goodbye"));
    });
    assert_eq!(
        message,
        "\nExpected: a string containing \"goodbye\"\n     but: was \"hello world\""
    );
}

#[test]
fn starts_with_checks_prefixes() {
    assert_that("hello world", starts_with("hello"));
    assert!(!starts_with("world").matches("hello world"));
}

#[test]
fn ends_with_checks_suffixes() {
    assert_that("hello world", ends_with("world"));
    assert!(!ends_with("hello").matches("hello world"));
}

#[test]
fn equal_ignoring_case_is_case_blind() {
    assert_that("Hello World", equal_ignoring_case("hello world"));
    assert_that("HELLO", equal_ignoring_case("hello"));
    assert!(!equal_ignoring_case("hello").matches("hello world"));
}

#[test]
fn equal_ignoring_case_folds_beyond_ascii() {
    assert_that("ÜBER", equal_ignoring_case("über"));
    assert_that("café", equal_ignoring_case("CAFÉ"));
    assert!(!equal_ignoring_case("über").matches("uber"));
}

#[test]
fn contains_bytes_finds_subsequences() {
    assert_that(&b"hello world"[..], contains_bytes(b"lo wo".to_vec()));
    assert_that(&vec![1u8, 2, 3, 4], contains_bytes(vec![2, 3]));
}

#[test]
fn contains_bytes_with_empty_needle_always_matches() {
    assert_that(&b"abc"[..], contains_bytes(Vec::new()));
    assert_that(&b""[..], contains_bytes(Vec::new()));
}

#[test]
fn contains_bytes_rejects_needles_longer_than_the_haystack() {
    assert!(!contains_bytes(b"abcd".to_vec()).matches(&b"abc"[..]));
}

#[test]
fn contains_bytes_failure_message() {
    let message = util::capture_panic_message(|| {
        assert_that(&vec![1u8, 2, 3], contains_bytes(vec![9u8]));
    });
    assert_eq!(
        message,
        "\nExpected: a byte string containing [9]\n     but: was [1, 2, 3]"
    );
}

#[cfg(feature = "regex")]
mod regex_matching {
    use matcha::{assert_that, matches_regex, Matcher};

    use crate::util;

    #[test]
    fn matches_anywhere_in_the_string() {
        assert_that("order-12345", matches_regex(r"\d{5}"));
        assert!(!matches_regex(r"^\d+$").matches("order-12345"));
    }

    #[test]
    fn anchors_are_respected() {
        assert_that("12345", matches_regex(r"^\d+$"));
    }

    #[test]
    fn invalid_pattern_never_matches() {
        assert!(!matches_regex("(unclosed").matches("anything"));
    }

    #[test]
    fn invalid_pattern_failure_message() {
        let message = util::capture_panic_message(|| {
            assert_that("anything", matches_regex("(unclosed"));
        });
        assert_eq!(
            message,
            "\nExpected: a string matching the regex \"(unclosed\"\n     but: the pattern \"(unclosed\" is not a valid regex"
        );
    }

    #[test]
    fn failure_message_names_the_actual_string() {
        let message = util::capture_panic_message(|| {
            assert_that("letters", matches_regex(r"\d+"));
        });
        assert_eq!(
            message,
            "\nExpected: a string matching the regex \"\\\\d+\"\n     but: was \"letters\""
        );
    }
}

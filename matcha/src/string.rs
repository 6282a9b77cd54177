//! Matchers for strings and byte strings.
//!
//! All string matchers accept any actual value that is `AsRef<str>`, so they
//! work against `String`, `&str` and string-ish newtypes alike.

use crate::wrap::IntoMatcher;
use crate::{Description, Matcher};

macro_rules! string_matcher {
    ($matcher:ident, $test:expr, $described:literal) => {
        impl<T: AsRef<str> + ?Sized> Matcher<T> for $matcher {
            fn matches(&self, actual: &T) -> bool {
                let test: fn(&str, &str) -> bool = $test;
                test(actual.as_ref(), &self.expected)
            }

            fn describe_to(&self, description: &mut Description) {
                description
                    .append_text($described)
                    .append_value(&self.expected);
            }

            fn describe_mismatch(&self, actual: &T, description: &mut Description) {
                description.append_text("was ").append_value(actual.as_ref());
            }
        }

        impl IntoMatcher<String> for $matcher {
            type Out = Self;

            fn into_matcher(self) -> Self {
                self
            }
        }

        impl<'a> IntoMatcher<&'a str> for $matcher {
            type Out = Self;

            fn into_matcher(self) -> Self {
                self
            }
        }
    };
}

/// Matches strings containing a given substring.
#[derive(Debug, Clone)]
pub struct ContainsString {
    expected: String,
}

/// Matches strings containing `substring`.
pub fn contains_string(substring: impl Into<String>) -> ContainsString {
    ContainsString {
        expected: substring.into(),
    }
}

string_matcher!(
    ContainsString,
    |actual, expected| actual.contains(expected),
    "a string containing "
);

/// Matches strings starting with a given prefix.
#[derive(Debug, Clone)]
pub struct StartsWith {
    expected: String,
}

/// Matches strings starting with `prefix`.
pub fn starts_with(prefix: impl Into<String>) -> StartsWith {
    StartsWith {
        expected: prefix.into(),
    }
}

string_matcher!(
    StartsWith,
    |actual, expected| actual.starts_with(expected),
    "a string starting with "
);

/// Matches strings ending with a given suffix.
#[derive(Debug, Clone)]
pub struct EndsWith {
    expected: String,
}

/// Matches strings ending with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> EndsWith {
    EndsWith {
        expected: suffix.into(),
    }
}

string_matcher!(
    EndsWith,
    |actual, expected| actual.ends_with(expected),
    "a string ending with "
);

/// Matches strings equal to an expected string, ignoring case.
///
/// Case folding is Unicode-aware: both sides are compared via
/// [`str::to_lowercase`], so `"ÜBER"` equals `"über"`.
#[derive(Debug, Clone)]
pub struct EqualIgnoringCase {
    expected: String,
}

/// Matches strings equal to `expected` ignoring case.
pub fn equal_ignoring_case(expected: impl Into<String>) -> EqualIgnoringCase {
    EqualIgnoringCase {
        expected: expected.into(),
    }
}

string_matcher!(
    EqualIgnoringCase,
    |actual, expected| actual.to_lowercase() == expected.to_lowercase(),
    "a string equal ignoring case to "
);

/// Matches strings against a regular expression.
#[cfg(feature = "regex")]
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: String,
    compiled: Option<regex::Regex>,
}

/// Matches strings that the regular expression `pattern` matches anywhere.
///
/// An invalid pattern never matches; the mismatch description names the
/// pattern as unparseable rather than panicking inside an assertion.
#[cfg(feature = "regex")]
pub fn matches_regex(pattern: impl Into<String>) -> MatchesRegex {
    let pattern = pattern.into();
    let compiled = regex::Regex::new(&pattern).ok();
    MatchesRegex { pattern, compiled }
}

#[cfg(feature = "regex")]
impl<T: AsRef<str> + ?Sized> Matcher<T> for MatchesRegex {
    fn matches(&self, actual: &T) -> bool {
        self.compiled
            .as_ref()
            .map(|re| re.is_match(actual.as_ref()))
            .unwrap_or(false)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a string matching the regex ")
            .append_value(&self.pattern);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        if self.compiled.is_none() {
            description
                .append_text("the pattern ")
                .append_value(&self.pattern)
                .append_text(" is not a valid regex");
        } else {
            description.append_text("was ").append_value(actual.as_ref());
        }
    }
}

#[cfg(feature = "regex")]
impl IntoMatcher<String> for MatchesRegex {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

#[cfg(feature = "regex")]
impl<'a> IntoMatcher<&'a str> for MatchesRegex {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

/// Matches byte strings containing a given byte subsequence.
#[derive(Debug, Clone)]
pub struct ContainsBytes {
    expected: Vec<u8>,
}

/// Matches byte strings containing `bytes` as a contiguous subsequence.
pub fn contains_bytes(bytes: impl Into<Vec<u8>>) -> ContainsBytes {
    ContainsBytes {
        expected: bytes.into(),
    }
}

impl<T: AsRef<[u8]> + ?Sized> Matcher<T> for ContainsBytes {
    fn matches(&self, actual: &T) -> bool {
        let actual = actual.as_ref();
        if self.expected.is_empty() {
            return true;
        }
        if actual.len() < self.expected.len() {
            return false;
        }
        actual
            .windows(self.expected.len())
            .any(|window| window == self.expected.as_slice())
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a byte string containing ")
            .append_value(&self.expected);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        description.append_text("was ").append_value(actual.as_ref());
    }
}

impl IntoMatcher<Vec<u8>> for ContainsBytes {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matcher;

    #[test]
    fn contains_bytes_handles_short_and_empty_actuals() {
        let matcher = contains_bytes(&b"abc"[..]);
        assert!(matcher.matches(b"xxabcxx".as_slice()));
        assert!(!matcher.matches(b"ab".as_slice()));
        assert!(contains_bytes(Vec::new()).matches(b"".as_slice()));
    }
}

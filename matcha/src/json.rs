//! Matchers for JSON text.

use crate::wrap::IntoMatcher;
use crate::{Description, Matcher};

/// Matches strings that parse as JSON satisfying an inner matcher.
pub struct JsonMatching {
    matcher: Box<dyn Matcher<serde_json::Value>>,
}

/// Matches strings containing JSON data satisfying `expected`: either a
/// matcher over [`serde_json::Value`] or a bare value (for example from
/// `serde_json::json!`), matched for equality.
///
/// Text that is not valid JSON never matches; the mismatch description says
/// so instead of propagating the parse error.
///
/// ```rust
/// use matcha::{assert_that, json_matching};
/// use serde_json::json;
///
/// assert_that(r#"{"answer": 42}"#, json_matching(json!({"answer": 42})));
/// ```
pub fn json_matching<M>(expected: M) -> JsonMatching
where
    M: IntoMatcher<serde_json::Value>,
    M::Out: 'static,
{
    JsonMatching {
        matcher: Box::new(expected.into_matcher()),
    }
}

impl<T: AsRef<str> + ?Sized> Matcher<T> for JsonMatching {
    fn matches(&self, actual: &T) -> bool {
        match serde_json::from_str::<serde_json::Value>(actual.as_ref()) {
            Ok(parsed) => self.matcher.matches(&parsed),
            Err(_) => false,
        }
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("JSON structure matching ");
        self.matcher.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        match serde_json::from_str::<serde_json::Value>(actual.as_ref()) {
            Ok(parsed) => self.matcher.describe_mismatch(&parsed, description),
            Err(_) => {
                description
                    .append_text("Got invalid JSON ")
                    .append_value(actual.as_ref());
            }
        }
    }
}

impl IntoMatcher<String> for JsonMatching {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

impl<'a> IntoMatcher<&'a str> for JsonMatching {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

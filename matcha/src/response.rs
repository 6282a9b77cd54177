//! Matchers for HTTP responses.

use crate::__macro_support::FieldSlot;
use crate::wrap::IntoMatcher;
use crate::{Description, Matcher};

/// Builder-style matcher over [`http::Response`] values.
///
/// Only customized parts are checked and described; a fresh matcher accepts
/// every response.
///
/// ```rust
/// use matcha::{assert_that, contains_string, is_response};
///
/// let response = http::Response::builder()
///     .status(200)
///     .header("content-type", "text/plain")
///     .body("hello world")
///     .unwrap();
///
/// assert_that(
///     &response,
///     is_response()
///         .with_status_code(200)
///         .and_body(contains_string("hello"))
///         .and_header("content-type", contains_string("text")),
/// );
/// ```
pub struct ResponseMatcher {
    status_code: FieldSlot<u16>,
    body: FieldSlot<String>,
    content: FieldSlot<Vec<u8>>,
    json: FieldSlot<serde_json::Value>,
    headers: Vec<(String, Box<dyn Matcher<String>>)>,
}

/// Creates a matcher accepting any response; narrow it with the setters.
pub fn is_response() -> ResponseMatcher {
    ResponseMatcher {
        status_code: FieldSlot::anything(),
        body: FieldSlot::anything(),
        content: FieldSlot::anything(),
        json: FieldSlot::anything(),
        headers: Vec::new(),
    }
}

impl ResponseMatcher {
    /// Requires the numeric status code to satisfy `code`.
    pub fn with_status_code<M>(mut self, code: M) -> Self
    where
        M: IntoMatcher<u16>,
        M::Out: 'static,
    {
        self.status_code = FieldSlot::set(code);
        self
    }

    /// Alias of [`Self::with_status_code`], for chained reading.
    pub fn and_status_code<M>(self, code: M) -> Self
    where
        M: IntoMatcher<u16>,
        M::Out: 'static,
    {
        self.with_status_code(code)
    }

    /// Requires the body, decoded as text, to satisfy `body`.
    pub fn with_body<M>(mut self, body: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.body = FieldSlot::set(body);
        self
    }

    /// Alias of [`Self::with_body`], for chained reading.
    pub fn and_body<M>(self, body: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.with_body(body)
    }

    /// Requires the raw body bytes to satisfy `content`.
    pub fn with_content<M>(mut self, content: M) -> Self
    where
        M: IntoMatcher<Vec<u8>>,
        M::Out: 'static,
    {
        self.content = FieldSlot::set(content);
        self
    }

    /// Alias of [`Self::with_content`], for chained reading.
    pub fn and_content<M>(self, content: M) -> Self
    where
        M: IntoMatcher<Vec<u8>>,
        M::Out: 'static,
    {
        self.with_content(content)
    }

    /// Requires the body, parsed as JSON, to satisfy `json`. A body that is
    /// not valid JSON is a mismatch.
    pub fn with_json<M>(mut self, json: M) -> Self
    where
        M: IntoMatcher<serde_json::Value>,
        M::Out: 'static,
    {
        self.json = FieldSlot::set(json);
        self
    }

    /// Alias of [`Self::with_json`], for chained reading.
    pub fn and_json<M>(self, json: M) -> Self
    where
        M: IntoMatcher<serde_json::Value>,
        M::Out: 'static,
    {
        self.with_json(json)
    }

    /// Requires a header `name` whose value satisfies `value`.
    pub fn with_header<M>(mut self, name: impl Into<String>, value: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.headers
            .push((name.into(), Box::new(value.into_matcher())));
        self
    }

    /// Alias of [`Self::with_header`], for chained reading.
    pub fn and_header<M>(self, name: impl Into<String>, value: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.with_header(name, value)
    }
}

impl ResponseMatcher {
    fn header_value<B>(response: &http::Response<B>, name: &str) -> Option<String> {
        response
            .headers()
            .get(name)
            .map(|value| value.to_str().unwrap_or("").to_string())
    }
}

impl<B: AsRef<[u8]>> Matcher<http::Response<B>> for ResponseMatcher {
    fn matches(&self, actual: &http::Response<B>) -> bool {
        let bytes = actual.body().as_ref();
        let text = String::from_utf8_lossy(bytes).into_owned();
        let json_ok = if self.json.is_set() {
            match serde_json::from_slice::<serde_json::Value>(bytes) {
                Ok(value) => self.json.matches(&value),
                Err(_) => false,
            }
        } else {
            true
        };
        self.status_code.matches(&actual.status().as_u16())
            && self.body.matches(&text)
            && self.content.matches(&bytes.to_vec())
            && json_ok
            && self.headers.iter().all(|(name, matcher)| {
                Self::header_value(actual, name)
                    .map(|value| matcher.matches(&value))
                    .unwrap_or(false)
            })
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("response with");
        self.status_code
            .append_description("status code", description);
        self.body.append_description("body", description);
        self.content.append_description("content", description);
        self.json.append_description("json", description);
        for (name, matcher) in &self.headers {
            description
                .append_text(" header ")
                .append_value(name.as_str())
                .append_text(": ");
            matcher.describe_to(description);
        }
    }

    fn describe_mismatch(&self, actual: &http::Response<B>, description: &mut Description) {
        let bytes = actual.body().as_ref();
        let text = String::from_utf8_lossy(bytes).into_owned();
        description.append_text("was response with");
        self.status_code
            .append_mismatch("status code", &actual.status().as_u16(), description);
        self.body.append_mismatch("body", &text, description);
        self.content
            .append_mismatch("content", &bytes.to_vec(), description);
        if self.json.is_set() {
            match serde_json::from_slice::<serde_json::Value>(bytes) {
                Ok(value) => self.json.append_mismatch("json", &value, description),
                Err(_) => {
                    description
                        .append_text(" json: was invalid JSON ")
                        .append_value(&text);
                }
            }
        }
        for (name, matcher) in &self.headers {
            match Self::header_value(actual, name) {
                Some(value) => {
                    if !matcher.matches(&value) {
                        description
                            .append_text(" header ")
                            .append_value(name.as_str())
                            .append_text(": ");
                        matcher.describe_mismatch(&value, description);
                    }
                }
                None => {
                    description
                        .append_text(" header ")
                        .append_value(name.as_str())
                        .append_text(": was missing");
                }
            }
        }
    }
}

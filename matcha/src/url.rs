//! Matchers for URLs.
//!
//! A hand-written builder-style matcher in the same shape the derived ones
//! take: one predicate slot per interesting URL component, chainable
//! `with_x`/`and_x` setters, and only customized slots described.

use url::Url;

use crate::__macro_support::FieldSlot;
use crate::wrap::IntoMatcher;
use crate::{Description, Matcher};

/// Builder-style matcher over URL components.
///
/// Matches `url::Url` values and anything string-like; a string that cannot
/// be parsed as a URL is an ordinary mismatch, not an error.
///
/// ```rust
/// use matcha::{assert_that, contains_string, url_with_host};
///
/// assert_that(
///     "https://example.com/search?q=matchers",
///     url_with_host("example.com")
///         .and_path("/search")
///         .and_query_param("q", contains_string("match")),
/// );
/// ```
pub struct UrlWith {
    scheme: FieldSlot<String>,
    host: FieldSlot<String>,
    path: FieldSlot<String>,
    query: FieldSlot<String>,
    query_params: Vec<(String, Box<dyn Matcher<String>>)>,
}

impl UrlWith {
    /// Creates a matcher with no component constrained; use the setters to
    /// narrow it.
    pub fn new() -> Self {
        UrlWith {
            scheme: FieldSlot::anything(),
            host: FieldSlot::anything(),
            path: FieldSlot::anything(),
            query: FieldSlot::anything(),
            query_params: Vec::new(),
        }
    }

    /// Requires the URL scheme to satisfy `scheme`.
    pub fn with_scheme<M>(mut self, scheme: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.scheme = FieldSlot::set(scheme);
        self
    }

    /// Alias of [`Self::with_scheme`], for chained reading.
    pub fn and_scheme<M>(self, scheme: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.with_scheme(scheme)
    }

    /// Requires the URL host to satisfy `host`.
    pub fn with_host<M>(mut self, host: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.host = FieldSlot::set(host);
        self
    }

    /// Alias of [`Self::with_host`], for chained reading.
    pub fn and_host<M>(self, host: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.with_host(host)
    }

    /// Requires the URL path to satisfy `path`.
    pub fn with_path<M>(mut self, path: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.path = FieldSlot::set(path);
        self
    }

    /// Alias of [`Self::with_path`], for chained reading.
    pub fn and_path<M>(self, path: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.with_path(path)
    }

    /// Requires the raw query string to satisfy `query`.
    pub fn with_query<M>(mut self, query: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.query = FieldSlot::set(query);
        self
    }

    /// Alias of [`Self::with_query`], for chained reading.
    pub fn and_query<M>(self, query: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.with_query(query)
    }

    /// Requires a query parameter `name` whose value satisfies `value`.
    pub fn with_query_param<M>(mut self, name: impl Into<String>, value: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.query_params
            .push((name.into(), Box::new(value.into_matcher())));
        self
    }

    /// Alias of [`Self::with_query_param`], for chained reading.
    pub fn and_query_param<M>(self, name: impl Into<String>, value: M) -> Self
    where
        M: IntoMatcher<String>,
        M::Out: 'static,
    {
        self.with_query_param(name, value)
    }
}

impl Default for UrlWith {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches URLs with a host satisfying `host`.
pub fn url_with_host<M>(host: M) -> UrlWith
where
    M: IntoMatcher<String>,
    M::Out: 'static,
{
    UrlWith::new().with_host(host)
}

/// Matches URLs with a path satisfying `path`.
pub fn url_with_path<M>(path: M) -> UrlWith
where
    M: IntoMatcher<String>,
    M::Out: 'static,
{
    UrlWith::new().with_path(path)
}

impl UrlWith {
    fn param_value(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    fn matches_url(&self, url: &Url) -> bool {
        self.scheme.matches(&url.scheme().to_string())
            && self.host.matches(&url.host_str().unwrap_or("").to_string())
            && self.path.matches(&url.path().to_string())
            && self.query.matches(&url.query().unwrap_or("").to_string())
            && self.query_params.iter().all(|(name, matcher)| {
                Self::param_value(url, name)
                    .map(|value| matcher.matches(&value))
                    .unwrap_or(false)
            })
    }

    fn describe_mismatched_url(&self, url: &Url, description: &mut Description) {
        description.append_text("was URL with");
        self.scheme
            .append_mismatch("scheme", &url.scheme().to_string(), description);
        self.host
            .append_mismatch("host", &url.host_str().unwrap_or("").to_string(), description);
        self.path
            .append_mismatch("path", &url.path().to_string(), description);
        self.query
            .append_mismatch("query", &url.query().unwrap_or("").to_string(), description);
        for (name, matcher) in &self.query_params {
            match Self::param_value(url, name) {
                Some(value) => {
                    if !matcher.matches(&value) {
                        description
                            .append_text(" query parameter ")
                            .append_value(name.as_str())
                            .append_text(": ");
                        matcher.describe_mismatch(&value, description);
                    }
                }
                None => {
                    description
                        .append_text(" query parameter ")
                        .append_value(name.as_str())
                        .append_text(": was missing");
                }
            }
        }
    }
}

impl<T: AsRef<str> + ?Sized> Matcher<T> for UrlWith {
    fn matches(&self, actual: &T) -> bool {
        match Url::parse(actual.as_ref()) {
            Ok(url) => self.matches_url(&url),
            Err(_) => false,
        }
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("URL with");
        self.scheme.append_description("scheme", description);
        self.host.append_description("host", description);
        self.path.append_description("path", description);
        self.query.append_description("query", description);
        for (name, matcher) in &self.query_params {
            description
                .append_text(" query parameter ")
                .append_value(name.as_str())
                .append_text(": ");
            matcher.describe_to(description);
        }
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        match Url::parse(actual.as_ref()) {
            Ok(url) => self.describe_mismatched_url(&url, description),
            Err(_) => {
                description
                    .append_text("was ")
                    .append_value(actual.as_ref())
                    .append_text(", which could not be parsed as a URL");
            }
        }
    }
}

impl IntoMatcher<String> for UrlWith {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

impl<'a> IntoMatcher<&'a str> for UrlWith {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

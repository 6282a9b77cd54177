//! # matcha: Composable Test Matchers
//!
//! `matcha` is a hamcrest-style assertion library: assertions are built from
//! small, composable *matcher* objects that know how to test a value and how
//! to explain themselves when the test fails. Instead of a wall of
//! `assert_eq!` calls, a test states its intent once and gets a readable
//! two-part failure message: what was expected, and what was actually seen.
//!
//! # Quick Start
//!
//! ```rust
//! use matcha::{assert_that, contains_string, equal_to};
//!
//! assert_that("the quick brown fox", contains_string("quick"));
//! assert_that(&(41 + 1), equal_to(42));
//! ```
//!
//! A failed assertion panics with an `Expected:`/`but:` message:
//!
//! ```rust,should_panic
//! use matcha::{assert_that, starts_with};
//!
//! assert_that("lazy dog", starts_with("quick"));
//! // panics with:
//! //
//! // Expected: a string starting with "quick"
//! //      but: was "lazy dog"
//! ```
//!
//! # Derived fluent matchers
//!
//! The `#[derive(AutoMatcher)]` macro turns a plain record type into a
//! builder-style matcher with one chainable setter per field. Fields you
//! don't constrain match anything:
//!
//! ```rust
//! use matcha::{AutoMatcher, assert_that, not, starts_with};
//!
//! #[derive(Debug, AutoMatcher)]
//! struct Status {
//!     id: i64,
//!     code: String,
//!     reason: Option<String>,
//! }
//!
//! fn is_status() -> StatusMatcher {
//!     StatusMatcher::new()
//! }
//!
//! let status = Status {
//!     id: 99,
//!     code: "ACTIVE".to_string(),
//!     reason: None,
//! };
//!
//! assert_that(&status, is_status().with_code(starts_with("ACT")).and_reason(None));
//! assert_that(&status, not(is_status().with_id(42)));
//! ```
//!
//! Setters accept either another matcher or a bare value, which is matched
//! for equality (see [`IntoMatcher`]). Constraining a field that does not
//! exist is a compile error, not a runtime surprise.
//!
//! # Structural equality
//!
//! `#[derive(Structural)]` gives a type a reflected view of its public state,
//! and [`has_identical_properties_to`] compares whole object graphs by that
//! state, field by field, recursively:
//!
//! ```rust
//! use matcha::{Structural, assert_that, has_identical_properties_to};
//!
//! #[derive(Debug, Structural)]
//! struct Address {
//!     street: String,
//!     city: String,
//! }
//!
//! #[derive(Debug, Structural)]
//! struct Customer {
//!     name: String,
//!     address: Address,
//! }
//!
//! let expected = Customer {
//!     name: "Alice".to_string(),
//!     address: Address { street: "1 High St".to_string(), city: "Leeds".to_string() },
//! };
//! let actual = Customer {
//!     name: "Alice".to_string(),
//!     address: Address { street: "1 High St".to_string(), city: "Leeds".to_string() },
//! };
//!
//! assert_that(&actual, has_identical_properties_to(&expected));
//! ```
//!
//! Differences are reported with the path of the first field that diverged.
//! Individual field names can be excluded with
//! [`HasIdenticalPropertiesTo::ignoring`].
//!
//! # Domain matchers
//!
//! Beyond the core combinators ([`equal_to`], [`anything`], [`not`],
//! [`all_of!`](crate::all_of), [`any_of!`](crate::any_of), [`between`],
//! [`has_length`], [`has_item`], [`has_debug`], [`described_as`]), the crate
//! ships matchers for common test subjects:
//!
//! - strings and byte strings ([`contains_string`], [`starts_with`],
//!   [`ends_with`], [`equal_ignoring_case`], [`contains_bytes`], and, with
//!   the default `regex` feature, [`matches_regex`])
//! - JSON text ([`json_matching`])
//! - URLs ([`url::UrlWith`], [`url_with_host`], [`url_with_path`])
//! - HTTP responses ([`response::ResponseMatcher`], [`is_response`])
//! - dates ([`has_weekday`], [`is_weekday`])
//!
//! Collaborator failures (unparseable URLs, invalid JSON) are never raw
//! panics from inside a matcher; they surface as ordinary mismatches with a
//! description of what could not be understood.

use std::fmt;

pub mod basic;
pub mod datetime;
pub mod json;
pub mod object;
pub mod response;
pub mod string;
pub mod url;
mod wrap;

pub use matcha_macros::{AutoMatcher, Structural};

pub use crate::basic::{
    AllOf, AnyOf, Anything, Between, DescribedAs, HasDebug, HasItem, HasLength, Not, all_of,
    any_of, anything, between, described_as, has_debug, has_item, has_length, not,
};
pub use crate::datetime::{HasWeekday, has_weekday, is_weekday};
pub use crate::json::{JsonMatching, json_matching};
pub use crate::object::{
    HasIdenticalPropertiesTo, Structural, equal_vars, has_identical_properties_to,
};
pub use crate::response::{ResponseMatcher, is_response};
pub use crate::string::{
    ContainsBytes, ContainsString, EndsWith, EqualIgnoringCase, StartsWith, contains_bytes,
    contains_string, ends_with, equal_ignoring_case, starts_with,
};
#[cfg(feature = "regex")]
pub use crate::string::{MatchesRegex, matches_regex};
pub use crate::url::{UrlWith, url_with_host, url_with_path};
pub use crate::wrap::{EqualTo, IntoMatcher, Is, equal_to, is};

/// A predicate over values of type `T`, plus two rendering operations used to
/// build assertion-failure messages.
///
/// Matchers are deterministic and side-effect free: evaluating the same
/// matcher against the same value always yields the same answer, and a
/// matcher never mutates the value it inspects.
pub trait Matcher<T: ?Sized> {
    /// Tests whether `actual` satisfies this matcher.
    fn matches(&self, actual: &T) -> bool;

    /// Appends a description of what this matcher expects.
    fn describe_to(&self, description: &mut Description);

    /// Appends a description of how `actual` diverged from the expectation.
    ///
    /// Only called after [`Matcher::matches`] returned `false`.
    fn describe_mismatch(&self, actual: &T, description: &mut Description);
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, actual: &T) -> bool {
        (**self).matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        (**self).describe_mismatch(actual, description);
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, actual: &T) -> bool {
        (**self).matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        (**self).describe_mismatch(actual, description);
    }
}

/// Accumulates the human-readable text a matcher produces.
#[derive(Debug, Default)]
pub struct Description {
    out: String,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends literal text.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    /// Appends the `Debug` rendering of a value.
    pub fn append_value<T: fmt::Debug + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.out.push_str(&format!("{value:?}"));
        self
    }

    /// Appends another matcher's self-description.
    pub fn append_description_of<T: ?Sized>(
        &mut self,
        matcher: &(impl Matcher<T> + ?Sized),
    ) -> &mut Self {
        matcher.describe_to(self);
        self
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.out)
    }
}

/// Asserts that `actual` satisfies `matcher`, panicking with a two-part
/// `Expected:`/`but:` message when it does not.
///
/// ```rust,should_panic
/// use matcha::{assert_that, equal_to};
///
/// assert_that(&41, equal_to(42));
/// // Expected: 42
/// //      but: was 41
/// ```
#[track_caller]
pub fn assert_that<T: ?Sized, M: Matcher<T>>(actual: &T, matcher: M) {
    if matcher.matches(actual) {
        return;
    }
    let mut expected = Description::new();
    matcher.describe_to(&mut expected);
    let mut mismatch = Description::new();
    matcher.describe_mismatch(actual, &mut mismatch);
    panic!("\nExpected: {expected}\n     but: {mismatch}");
}

// Hidden module for derive-generated code.
#[doc(hidden)]
pub mod __macro_support {
    use crate::{Description, IntoMatcher, Matcher};

    /// Per-field predicate holder behind derived fluent matchers.
    ///
    /// A slot starts out matching anything and is only described once a
    /// caller has customized it through a `with_x`/`and_x` setter.
    pub enum FieldSlot<T: ?Sized> {
        Anything,
        Set(Box<dyn Matcher<T>>),
    }

    impl<T: ?Sized> FieldSlot<T> {
        pub fn anything() -> Self {
            FieldSlot::Anything
        }

        pub fn set<M>(matcher: M) -> Self
        where
            M: IntoMatcher<T>,
            M::Out: 'static,
        {
            FieldSlot::Set(Box::new(matcher.into_matcher()))
        }

        pub fn is_set(&self) -> bool {
            matches!(self, FieldSlot::Set(_))
        }

        pub fn matches(&self, actual: &T) -> bool {
            match self {
                FieldSlot::Anything => true,
                FieldSlot::Set(matcher) => matcher.matches(actual),
            }
        }

        /// Appends ` name: <expectation>` for a customized slot; default
        /// slots stay silent.
        pub fn append_description(&self, name: &str, description: &mut Description) {
            if let FieldSlot::Set(matcher) = self {
                description.append_text(" ").append_text(name).append_text(": ");
                matcher.describe_to(description);
            }
        }

        /// Appends ` name: <mismatch>` for a customized slot the actual value
        /// fails; passing and default slots stay silent.
        pub fn append_mismatch(&self, name: &str, actual: &T, description: &mut Description) {
            if let FieldSlot::Set(matcher) = self {
                if !matcher.matches(actual) {
                    description.append_text(" ").append_text(name).append_text(": ");
                    matcher.describe_mismatch(actual, description);
                }
            }
        }
    }

    impl<T: ?Sized> Default for FieldSlot<T> {
        fn default() -> Self {
            FieldSlot::Anything
        }
    }
}

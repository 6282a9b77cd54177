//! Normalizing bare values and matchers into a uniform predicate interface.
//!
//! Builder setters and combinator constructors accept `impl IntoMatcher<T>`:
//! an existing matcher passes through unchanged, a bare value is wrapped in
//! an equality matcher. Wrapping is idempotent: wrapping twice behaves
//! exactly like wrapping once.

use std::fmt;
use std::marker::PhantomData;

use crate::{Description, Matcher};

/// Conversion into a [`Matcher<T>`].
///
/// Two families of implementations exist:
///
/// - the blanket impl for any `T: PartialEq + Debug`, wrapping the value in
///   [`EqualTo`];
/// - identity impls on matcher types themselves, passing the matcher through
///   untouched.
///
/// Matcher types that cannot carry an identity impl without overlapping the
/// blanket one (matchers generic over every actual type, such as
/// [`has_identical_properties_to`](crate::has_identical_properties_to)) are
/// lifted with [`is`] instead.
pub trait IntoMatcher<T: ?Sized> {
    type Out: Matcher<T>;

    fn into_matcher(self) -> Self::Out;
}

impl<T: PartialEq + fmt::Debug> IntoMatcher<T> for T {
    type Out = EqualTo<T>;

    fn into_matcher(self) -> EqualTo<T> {
        equal_to(self)
    }
}

// String literals are by far the most common bare value; wrapping them as
// owned strings lets `with_name("Alice")` match a `String` field.
impl IntoMatcher<String> for &str {
    type Out = EqualTo<String>;

    fn into_matcher(self) -> EqualTo<String> {
        equal_to(self.to_string())
    }
}

/// Matches values equal to `expected`.
#[derive(Debug, Clone)]
pub struct EqualTo<T> {
    expected: T,
}

/// Matches values equal to `expected`.
pub fn equal_to<T: PartialEq + fmt::Debug>(expected: T) -> EqualTo<T> {
    EqualTo { expected }
}

impl<T: PartialEq + fmt::Debug> Matcher<T> for EqualTo<T> {
    fn matches(&self, actual: &T) -> bool {
        self.expected == *actual
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_value(&self.expected);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        description.append_text("was ").append_value(actual);
    }
}

/// Decorator lifting any matcher into [`IntoMatcher`] without changing its
/// behavior or descriptions.
pub struct Is<T: ?Sized, M> {
    inner: M,
    _actual: PhantomData<fn(&T)>,
}

/// Decorates `matcher` without changing its meaning, so that matchers which
/// lack an identity [`IntoMatcher`] impl can be handed to builder setters.
pub fn is<T: ?Sized, M: Matcher<T>>(matcher: M) -> Is<T, M> {
    Is {
        inner: matcher,
        _actual: PhantomData,
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Is<T, M> {
    fn matches(&self, actual: &T) -> bool {
        self.inner.matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        self.inner.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        self.inner.describe_mismatch(actual, description);
    }
}

impl<T: ?Sized, M: Matcher<T>> IntoMatcher<T> for Is<T, M> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

impl<T: PartialEq + fmt::Debug> IntoMatcher<T> for EqualTo<T> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

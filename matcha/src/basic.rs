//! Core matchers and combinators: `anything`, `not`, conjunction and
//! disjunction, ranges, lengths, items, debug renderings, and relabeling.

use std::fmt;
use std::marker::PhantomData;

use crate::wrap::IntoMatcher;
use crate::{Description, Matcher};

/// Matches any value at all. The default predicate of every builder slot.
pub struct Anything<T: ?Sized> {
    _actual: PhantomData<fn(&T)>,
}

/// Matches any value at all.
pub fn anything<T: ?Sized>() -> Anything<T> {
    Anything {
        _actual: PhantomData,
    }
}

impl<T: ?Sized> Matcher<T> for Anything<T> {
    fn matches(&self, _actual: &T) -> bool {
        true
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("anything");
    }

    fn describe_mismatch(&self, _actual: &T, description: &mut Description) {
        description.append_text("matched");
    }
}

impl<T: ?Sized> IntoMatcher<T> for Anything<T> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

/// Inverts another matcher.
pub struct Not<T: ?Sized, M> {
    inner: M,
    _actual: PhantomData<fn(&T)>,
}

/// Matches when `matcher` does not.
pub fn not<T, M>(matcher: M) -> Not<T, M>
where
    T: ?Sized + fmt::Debug,
    M: Matcher<T>,
{
    Not {
        inner: matcher,
        _actual: PhantomData,
    }
}

impl<T: ?Sized + fmt::Debug, M: Matcher<T>> Matcher<T> for Not<T, M> {
    fn matches(&self, actual: &T) -> bool {
        !self.inner.matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("not ");
        self.inner.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        description.append_text("was ").append_value(actual);
    }
}

impl<T: ?Sized + fmt::Debug, M: Matcher<T>> IntoMatcher<T> for Not<T, M> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

/// Conjunction over boxed matchers; see the [`all_of!`](crate::all_of) macro.
pub struct AllOf<T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<T>>>,
}

/// Matches when every matcher in `matchers` matches.
///
/// The [`all_of!`](crate::all_of) macro boxes its arguments for you.
pub fn all_of<T: ?Sized>(matchers: Vec<Box<dyn Matcher<T>>>) -> AllOf<T> {
    AllOf { matchers }
}

impl<T: ?Sized> Matcher<T> for AllOf<T> {
    fn matches(&self, actual: &T) -> bool {
        self.matchers.iter().all(|m| m.matches(actual))
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("(");
        for (i, matcher) in self.matchers.iter().enumerate() {
            if i > 0 {
                description.append_text(" and ");
            }
            matcher.describe_to(description);
        }
        description.append_text(")");
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        // The first failing branch tells the whole story.
        for matcher in &self.matchers {
            if !matcher.matches(actual) {
                matcher.describe_to(description);
                description.append_text(" ");
                matcher.describe_mismatch(actual, description);
                return;
            }
        }
    }
}

impl<T: ?Sized> IntoMatcher<T> for AllOf<T> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

/// Disjunction over boxed matchers; see the [`any_of!`](crate::any_of) macro.
pub struct AnyOf<T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<T>>>,
}

/// Matches when at least one matcher in `matchers` matches.
pub fn any_of<T: ?Sized>(matchers: Vec<Box<dyn Matcher<T>>>) -> AnyOf<T> {
    AnyOf { matchers }
}

impl<T: ?Sized + fmt::Debug> Matcher<T> for AnyOf<T> {
    fn matches(&self, actual: &T) -> bool {
        self.matchers.iter().any(|m| m.matches(actual))
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("(");
        for (i, matcher) in self.matchers.iter().enumerate() {
            if i > 0 {
                description.append_text(" or ");
            }
            matcher.describe_to(description);
        }
        description.append_text(")");
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        description.append_text("was ").append_value(actual);
    }
}

impl<T: ?Sized + fmt::Debug> IntoMatcher<T> for AnyOf<T> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

/// Matches when every argument matcher matches.
///
/// ```rust
/// use matcha::{all_of, assert_that, contains_string, starts_with};
///
/// assert_that("quick brown fox", all_of!(starts_with("quick"), contains_string("brown")));
/// ```
#[macro_export]
macro_rules! all_of {
    ($($matcher:expr),+ $(,)?) => {
        $crate::basic::all_of(vec![$(Box::new($matcher) as Box<dyn $crate::Matcher<_>>),+])
    };
}

/// Matches when at least one argument matcher matches.
///
/// ```rust
/// use matcha::{any_of, assert_that, equal_to};
///
/// assert_that(&2, any_of!(equal_to(1), equal_to(2), equal_to(3)));
/// ```
#[macro_export]
macro_rules! any_of {
    ($($matcher:expr),+ $(,)?) => {
        $crate::basic::any_of(vec![$(Box::new($matcher) as Box<dyn $crate::Matcher<_>>),+])
    };
}

/// Matches values inside a range, exclusive at both ends unless widened.
#[derive(Debug, Clone)]
pub struct Between<T> {
    lower: T,
    upper: T,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

/// Matches values strictly between `lower` and `upper`.
///
/// Use [`Between::lower_inclusive`], [`Between::upper_inclusive`] or
/// [`Between::inclusive`] to close either end of the range.
pub fn between<T: PartialOrd + fmt::Debug>(lower: T, upper: T) -> Between<T> {
    Between {
        lower,
        upper,
        lower_inclusive: false,
        upper_inclusive: false,
    }
}

impl<T> Between<T> {
    /// Includes `lower` in the matched range.
    pub fn lower_inclusive(mut self) -> Self {
        self.lower_inclusive = true;
        self
    }

    /// Includes `upper` in the matched range.
    pub fn upper_inclusive(mut self) -> Self {
        self.upper_inclusive = true;
        self
    }

    /// Includes both endpoints in the matched range.
    pub fn inclusive(self) -> Self {
        self.lower_inclusive().upper_inclusive()
    }
}

impl<T: PartialOrd + fmt::Debug> Matcher<T> for Between<T> {
    fn matches(&self, actual: &T) -> bool {
        let above = if self.lower_inclusive {
            *actual >= self.lower
        } else {
            *actual > self.lower
        };
        let below = if self.upper_inclusive {
            *actual <= self.upper
        } else {
            *actual < self.upper
        };
        above && below
    }

    fn describe_to(&self, description: &mut Description) {
        let open = if self.lower_inclusive { "[" } else { "(" };
        let close = if self.upper_inclusive { "]" } else { ")" };
        description
            .append_text("a value in the range ")
            .append_text(open)
            .append_value(&self.lower)
            .append_text(", ")
            .append_value(&self.upper)
            .append_text(close);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        description.append_text("was ").append_value(actual);
    }
}

impl<T: PartialOrd + fmt::Debug> IntoMatcher<T> for Between<T> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

/// Replaces a matcher's description with fixed text.
pub struct DescribedAs<T: ?Sized, M> {
    text: String,
    inner: M,
    _actual: PhantomData<fn(&T)>,
}

/// Decorates `matcher` so `describe_to` renders `text` instead of the
/// matcher's own expectation; mismatch descriptions are unchanged.
pub fn described_as<T, M>(text: impl Into<String>, matcher: M) -> DescribedAs<T, M>
where
    T: ?Sized,
    M: Matcher<T>,
{
    DescribedAs {
        text: text.into(),
        inner: matcher,
        _actual: PhantomData,
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for DescribedAs<T, M> {
    fn matches(&self, actual: &T) -> bool {
        self.inner.matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text(&self.text);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        self.inner.describe_mismatch(actual, description);
    }
}

impl<T: ?Sized, M: Matcher<T>> IntoMatcher<T> for DescribedAs<T, M> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

/// Matches objects whose `Debug` rendering satisfies an inner matcher.
pub struct HasDebug<T: ?Sized, M> {
    inner: M,
    _actual: PhantomData<fn(&T)>,
}

/// Matches any object whose `{:?}` rendering satisfies `matcher`.
///
/// ```rust
/// use matcha::{assert_that, contains_string, has_debug};
///
/// assert_that(&vec![1, 2], has_debug(contains_string("[1, 2]")));
/// ```
pub fn has_debug<T, M>(matcher: M) -> HasDebug<T, M>
where
    T: ?Sized + fmt::Debug,
    M: Matcher<String>,
{
    HasDebug {
        inner: matcher,
        _actual: PhantomData,
    }
}

impl<T: ?Sized + fmt::Debug, M: Matcher<String>> Matcher<T> for HasDebug<T, M> {
    fn matches(&self, actual: &T) -> bool {
        self.inner.matches(&format!("{actual:?}"))
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("an object with debug representation matching ");
        self.inner.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        self.inner
            .describe_mismatch(&format!("{actual:?}"), description);
    }
}

impl<T: ?Sized + fmt::Debug, M: Matcher<String>> IntoMatcher<T> for HasDebug<T, M> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

/// Matches collections whose length satisfies an inner matcher.
pub struct HasLength<M> {
    inner: M,
}

/// Matches strings, slices and vectors whose length satisfies `length` (a
/// `usize` matcher or a bare expected length).
pub fn has_length<M: IntoMatcher<usize>>(length: M) -> HasLength<M::Out> {
    HasLength {
        inner: length.into_matcher(),
    }
}

impl<A, M: Matcher<usize>> Matcher<Vec<A>> for HasLength<M> {
    fn matches(&self, actual: &Vec<A>) -> bool {
        self.inner.matches(&actual.len())
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("a value with length ");
        self.inner.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &Vec<A>, description: &mut Description) {
        description.append_text("had length ").append_value(&actual.len());
    }
}

impl<A, M: Matcher<usize>> Matcher<[A]> for HasLength<M> {
    fn matches(&self, actual: &[A]) -> bool {
        self.inner.matches(&actual.len())
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("a value with length ");
        self.inner.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &[A], description: &mut Description) {
        description.append_text("had length ").append_value(&actual.len());
    }
}

impl<M: Matcher<usize>> Matcher<str> for HasLength<M> {
    fn matches(&self, actual: &str) -> bool {
        self.inner.matches(&actual.len())
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("a value with length ");
        self.inner.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &str, description: &mut Description) {
        description.append_text("had length ").append_value(&actual.len());
    }
}

impl<M: Matcher<usize>> Matcher<String> for HasLength<M> {
    fn matches(&self, actual: &String) -> bool {
        self.inner.matches(&actual.len())
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("a value with length ");
        self.inner.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &String, description: &mut Description) {
        description.append_text("had length ").append_value(&actual.len());
    }
}

/// Matches collections containing at least one element that satisfies an
/// inner matcher.
pub struct HasItem<T, M> {
    inner: M,
    _item: PhantomData<fn(&T)>,
}

/// Matches slices and vectors containing at least one element satisfying
/// `item` (a matcher or a bare expected element).
pub fn has_item<T, M>(item: M) -> HasItem<T, M::Out>
where
    T: fmt::Debug,
    M: IntoMatcher<T>,
{
    HasItem {
        inner: item.into_matcher(),
        _item: PhantomData,
    }
}

impl<T: fmt::Debug, M: Matcher<T>> Matcher<Vec<T>> for HasItem<T, M> {
    fn matches(&self, actual: &Vec<T>) -> bool {
        actual.iter().any(|item| self.inner.matches(item))
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("a collection containing ");
        self.inner.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &Vec<T>, description: &mut Description) {
        description.append_text("was ").append_value(actual);
    }
}

impl<T: fmt::Debug, M: Matcher<T>> Matcher<[T]> for HasItem<T, M> {
    fn matches(&self, actual: &[T]) -> bool {
        actual.iter().any(|item| self.inner.matches(item))
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("a collection containing ");
        self.inner.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &[T], description: &mut Description) {
        description.append_text("was ").append_value(actual);
    }
}

impl<T: fmt::Debug, M: Matcher<T>> IntoMatcher<Vec<T>> for HasItem<T, M> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

impl<M: Matcher<usize>> IntoMatcher<String> for HasLength<M> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

impl<A, M: Matcher<usize>> IntoMatcher<Vec<A>> for HasLength<M> {
    type Out = Self;

    fn into_matcher(self) -> Self {
        self
    }
}

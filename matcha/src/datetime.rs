//! Matchers for dates and times.

use std::fmt;

use chrono::{Datelike, Weekday};

use crate::basic::{described_as, DescribedAs};
use crate::wrap::{equal_to, is, IntoMatcher};
use crate::{any_of, Description, Matcher};

/// Matches any [`Datelike`] value whose weekday satisfies an inner matcher.
pub struct HasWeekday {
    day: Box<dyn Matcher<Weekday>>,
}

/// Matches dates falling on a weekday satisfying `day`.
///
/// ```rust
/// use chrono::{NaiveDate, Weekday};
/// use matcha::{assert_that, has_weekday};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_that(&date, has_weekday(Weekday::Mon));
/// ```
pub fn has_weekday<M>(day: M) -> HasWeekday
where
    M: IntoMatcher<Weekday>,
    M::Out: 'static,
{
    HasWeekday {
        day: Box::new(day.into_matcher()),
    }
}

impl<D: Datelike + fmt::Debug> Matcher<D> for HasWeekday {
    fn matches(&self, actual: &D) -> bool {
        self.day.matches(&actual.weekday())
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("a date with weekday matching ");
        self.day.describe_to(description);
    }

    fn describe_mismatch(&self, actual: &D, description: &mut Description) {
        description
            .append_text("was ")
            .append_value(actual)
            .append_text(" with weekday ")
            .append_value(&actual.weekday())
            .append_text(", a ")
            .append_text(day_name(actual.weekday()));
    }
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Matches dates falling Monday through Friday.
pub fn is_weekday<D: Datelike + fmt::Debug>() -> DescribedAs<D, HasWeekday> {
    described_as(
        "a weekday",
        has_weekday(is(any_of!(
            equal_to(Weekday::Mon),
            equal_to(Weekday::Tue),
            equal_to(Weekday::Wed),
            equal_to(Weekday::Thu),
            equal_to(Weekday::Fri)
        ))),
    )
}

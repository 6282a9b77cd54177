use chrono::{NaiveDate, TimeZone, Utc, Weekday};
use matcha::{assert_that, equal_to, has_weekday, is_weekday, not, Matcher};

mod util;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn has_weekday_takes_a_bare_weekday() {
    // 2024-01-01 was a Monday.
    assert_that(&date(2024, 1, 1), has_weekday(Weekday::Mon));
    assert!(!has_weekday(Weekday::Tue).matches(&date(2024, 1, 1)));
}

#[test]
fn has_weekday_takes_a_weekday_matcher() {
    assert_that(&date(2024, 1, 1), has_weekday(not(equal_to(Weekday::Sat))));
}

#[test]
fn works_on_datetimes_too() {
    let moment = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
    assert_that(&moment, has_weekday(Weekday::Mon));
}

#[test]
fn is_weekday_accepts_monday_through_friday() {
    assert_that(&date(2024, 1, 1), is_weekday()); // Monday
    assert_that(&date(2024, 1, 5), is_weekday()); // Friday
}

#[test]
fn is_weekday_rejects_the_weekend() {
    assert!(!is_weekday().matches(&date(2024, 1, 6))); // Saturday
    assert!(!is_weekday().matches(&date(2024, 1, 7))); // Sunday
}

#[test]
fn has_weekday_failure_message() {
    let message = util::capture_panic_message(|| {
        assert_that(&date(2024, 1, 6), has_weekday(Weekday::Mon));
    });
    assert_eq!(
        message,
        "\nExpected: a date with weekday matching Mon\n     but: was 2024-01-06 with weekday Sat, a Saturday"
    );
}

#[test]
fn is_weekday_failure_message() {
    let message = util::capture_panic_message(|| {
        assert_that(&date(2024, 1, 6), is_weekday());
    });
    assert_eq!(
        message,
        "\nExpected: a weekday\n     but: was 2024-01-06 with weekday Sat, a Saturday"
    );
}

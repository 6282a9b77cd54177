use matcha::{
    assert_that, between, contains_string, equal_to, has_item, not, starts_with, AutoMatcher,
    Matcher,
};

mod util;

#[derive(Debug, AutoMatcher)]
struct Status {
    id: u64,
    code: String,
    reason: Option<String>,
}

fn active(id: u64) -> Status {
    Status {
        id,
        code: "ACTIVE".to_string(),
        reason: None,
    }
}

#[test]
fn fresh_matcher_matches_anything() {
    assert_that(&active(7), StatusMatcher::new());
    assert_that(&active(99), StatusMatcher::default());
}

#[test]
fn customized_field_narrows_the_match() {
    assert_that(&active(7), StatusMatcher::new().with_id(7));
    assert!(!StatusMatcher::new().with_id(8).matches(&active(7)));
}

#[test]
fn uncustomized_fields_stay_unconstrained() {
    // Only `id` is pinned; `code` and `reason` may be anything.
    assert_that(&active(7), StatusMatcher::new().with_id(7));
}

#[test]
fn customized_fields_combine_with_and_semantics() {
    let status = active(7);
    assert_that(
        &status,
        StatusMatcher::new().with_id(7).and_code("ACTIVE"),
    );
    assert!(!StatusMatcher::new()
        .with_id(7)
        .and_code("RETIRED")
        .matches(&status));
}

#[test]
fn setter_order_does_not_matter() {
    let status = active(7);
    assert_that(&status, StatusMatcher::new().with_id(7).and_code("ACTIVE"));
    assert_that(&status, StatusMatcher::new().with_code("ACTIVE").and_id(7));
}

#[test]
fn setters_accept_matchers_and_bare_values_alike() {
    let status = active(7);
    assert_that(&status, StatusMatcher::new().with_code(starts_with("ACT")));
    assert_that(&status, StatusMatcher::new().with_code("ACTIVE".to_string()));
    assert_that(&status, StatusMatcher::new().with_id(between(1, 10)));
    assert_that(&status, StatusMatcher::new().with_id(equal_to(7)));
}

#[test]
fn option_fields_take_bare_options() {
    assert_that(&active(7), StatusMatcher::new().with_reason(None));
    let status = Status {
        reason: Some("maintenance".to_string()),
        ..active(7)
    };
    assert_that(
        &status,
        StatusMatcher::new().with_reason(Some("maintenance".to_string())),
    );
}

#[test]
fn repeated_setter_keeps_the_last_predicate() {
    assert_that(&active(7), StatusMatcher::new().with_id(99).with_id(7));
}

#[test]
fn derived_matchers_compose_with_combinators() {
    assert_that(&active(7), not(StatusMatcher::new().with_id(42)));

    let fleet = vec![active(1), active(2)];
    assert_that(&fleet, has_item(StatusMatcher::new().with_id(2)));
}

#[test]
fn mismatch_names_the_failing_field() {
    let message = util::capture_panic_message(|| {
        assert_that(&active(41), StatusMatcher::new().with_id(42));
    });
    assert_eq!(
        message,
        "\nExpected: Status with id: 42\n     but: was Status with id: was 41"
    );
}

#[test]
fn mismatch_reports_every_failing_field() {
    let message = util::capture_panic_message(|| {
        assert_that(
            &active(41),
            StatusMatcher::new().with_id(42).and_code("RETIRED"),
        );
    });
    assert_eq!(
        message,
        "\nExpected: Status with id: 42 code: \"RETIRED\"\n     but: was Status with id: was 41 code: was \"ACTIVE\""
    );
}

#[test]
fn mismatch_skips_fields_that_passed() {
    let message = util::capture_panic_message(|| {
        assert_that(
            &active(41),
            StatusMatcher::new().with_id(42).and_code("ACTIVE"),
        );
    });
    assert_eq!(
        message,
        "\nExpected: Status with id: 42 code: \"ACTIVE\"\n     but: was Status with id: was 41"
    );
}

#[test]
fn nested_field_matchers_describe_themselves() {
    let message = util::capture_panic_message(|| {
        assert_that(&active(7), StatusMatcher::new().with_code(contains_string("RETIR")));
    });
    assert_eq!(
        message,
        "\nExpected: Status with code: a string containing \"RETIR\"\n     but: was Status with code: was \"ACTIVE\""
    );
}

#[derive(Debug, AutoMatcher)]
struct Event {
    r#type: String,
    at: u64,
}

#[test]
fn raw_identifier_fields_get_plain_setter_names() {
    let event = Event {
        r#type: "click".to_string(),
        at: 12,
    };
    assert_that(&event, EventMatcher::new().with_type("click").and_at(12));

    let message = util::capture_panic_message(|| {
        assert_that(&event, EventMatcher::new().with_type("scroll"));
    });
    assert_eq!(
        message,
        "\nExpected: Event with type: \"scroll\"\n     but: was Event with type: was \"click\""
    );
}

#[derive(Debug, AutoMatcher)]
struct Wrapper<T: std::fmt::Debug + PartialEq + 'static> {
    inner: T,
    label: String,
}

#[test]
fn derive_supports_generic_structs() {
    let wrapper = Wrapper {
        inner: 5u32,
        label: "five".to_string(),
    };
    assert_that(
        &wrapper,
        WrapperMatcher::new().with_inner(5u32).and_label("five"),
    );
}

mod visibility {
    use matcha::AutoMatcher;

    #[derive(Debug, AutoMatcher)]
    pub struct Public {
        pub name: String,
    }
}

#[test]
fn generated_matcher_inherits_the_struct_visibility() {
    let item = visibility::Public {
        name: "exported".to_string(),
    };
    assert_that(&item, visibility::PublicMatcher::new().with_name("exported"));
}

use matcha::{assert_that, json_matching, Matcher};
use serde_json::json;

mod util;

#[test]
fn matches_parsed_json_against_a_bare_value() {
    assert_that(
        r#"{"name": "Ada", "age": 36}"#,
        json_matching(json!({"name": "Ada", "age": 36})),
    );
}

#[test]
fn key_order_is_irrelevant() {
    assert_that(
        r#"{"age": 36, "name": "Ada"}"#,
        json_matching(json!({"name": "Ada", "age": 36})),
    );
}

#[test]
fn differing_documents_do_not_match() {
    assert!(!json_matching(json!({"name": "Ada"})).matches(r#"{"name": "Grace"}"#));
}

#[test]
fn works_on_owned_strings() {
    let body = r#"[1, 2, 3]"#.to_string();
    assert_that(&body, json_matching(json!([1, 2, 3])));
}

#[test]
fn invalid_json_is_a_mismatch() {
    assert!(!json_matching(json!({})).matches("not json at all"));
}

#[test]
fn invalid_json_failure_message() {
    let message = util::capture_panic_message(|| {
        assert_that("not json at all", json_matching(json!({})));
    });
    assert!(message.starts_with("\nExpected: JSON structure matching "));
    assert!(message.ends_with("but: Got invalid JSON \"not json at all\""));
}

#[test]
fn failure_message_delegates_to_the_inner_matcher() {
    let message = util::capture_panic_message(|| {
        assert_that(r#"{"name": "Grace"}"#, json_matching(json!({"name": "Ada"})));
    });
    assert!(message.starts_with("\nExpected: JSON structure matching "));
    assert!(message.contains("Ada"));
    assert!(message.contains("Grace"));
}

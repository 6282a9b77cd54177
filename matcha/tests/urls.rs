use matcha::{assert_that, contains_string, starts_with, url_with_host, url_with_path, Matcher, UrlWith};
use url::Url;

mod util;

const SEARCH: &str = "https://example.com/search?q=matchers&page=2";

#[test]
fn fresh_matcher_accepts_any_url() {
    assert_that(SEARCH, UrlWith::new());
    assert_that("ftp://mirror.example.org/", UrlWith::default());
}

#[test]
fn host_factory_pins_the_host() {
    assert_that(SEARCH, url_with_host("example.com"));
    assert!(!url_with_host("example.org").matches(SEARCH));
}

#[test]
fn path_factory_pins_the_path() {
    assert_that(SEARCH, url_with_path("/search"));
    assert!(!url_with_path("/browse").matches(SEARCH));
}

#[test]
fn components_chain_with_and_semantics() {
    assert_that(
        SEARCH,
        url_with_host("example.com")
            .and_scheme("https")
            .and_path(starts_with("/sea"))
            .and_query("q=matchers&page=2"),
    );
}

#[test]
fn query_params_are_matched_by_name() {
    assert_that(
        SEARCH,
        UrlWith::new()
            .with_query_param("q", contains_string("match"))
            .and_query_param("page", "2"),
    );
    assert!(!UrlWith::new()
        .with_query_param("q", "other")
        .matches(SEARCH));
}

#[test]
fn missing_query_param_is_a_mismatch() {
    assert!(!UrlWith::new().with_query_param("missing", "x").matches(SEARCH));
}

#[test]
fn parsed_urls_match_like_strings() {
    let url = Url::parse(SEARCH).unwrap();
    assert_that(&url, url_with_host("example.com").and_path("/search"));
}

#[test]
fn unparseable_strings_never_match() {
    assert!(!url_with_host("example.com").matches("not a url"));
}

#[test]
fn host_mismatch_failure_message() {
    let message = util::capture_panic_message(|| {
        assert_that("https://example.org/", url_with_host("example.com"));
    });
    assert_eq!(
        message,
        "\nExpected: URL with host: \"example.com\"\n     but: was URL with host: was \"example.org\""
    );
}

#[test]
fn missing_query_param_failure_message() {
    let message = util::capture_panic_message(|| {
        assert_that(SEARCH, UrlWith::new().with_query_param("sort", "asc"));
    });
    assert_eq!(
        message,
        "\nExpected: URL with query parameter \"sort\": \"asc\"\n     but: was URL with query parameter \"sort\": was missing"
    );
}

#[test]
fn unparseable_string_failure_message() {
    let message = util::capture_panic_message(|| {
        assert_that("not a url", url_with_host("example.com"));
    });
    assert_eq!(
        message,
        "\nExpected: URL with host: \"example.com\"\n     but: was \"not a url\", which could not be parsed as a URL"
    );
}

use super::test_helpers::{
    APP_LINE, GATEWAY_LINE, app_record, gateway_record, with_path, with_status,
};
use crate::filter::{CategoryToggles, FilterEngine, FilterKind, classify_terms};
use crate::record::{FormatMode, parse_line};

fn engine(terms: &[&str], mode: FormatMode, toggles: CategoryToggles) -> FilterEngine {
    let classification = classify_terms(terms, mode, &toggles).unwrap();
    FilterEngine::from_classification(&classification, None, toggles, false)
}

#[test]
fn all_filters_must_hold() {
    let engine = engine(&["acme", "2xx"], FormatMode::ApplicationLog, CategoryToggles::default());

    assert!(engine.accepts(&app_record()));
    assert!(!engine.accepts(&with_status(app_record(), 500)));

    let mut other_host = app_record();
    other_host.hostname = "globex".to_string();
    assert!(!engine.accepts(&other_host));
}

#[test]
fn noisy_categories_are_suppressed_by_default() {
    let engine = engine(&["acme"], FormatMode::ApplicationLog, CategoryToggles::default());

    assert!(!engine.accepts(&with_path(app_record(), "/json/messages")));
    assert!(!engine.accepts(&with_path(app_record(), "/static/app.js")));
    assert!(engine.accepts(&with_path(app_record(), "/json/users")));
}

#[test]
fn toggles_reveal_their_category() {
    let toggles = CategoryToggles {
        messages: true,
        ..CategoryToggles::default()
    };
    let engine = engine(&["acme"], FormatMode::ApplicationLog, toggles);

    assert!(engine.accepts(&with_path(app_record(), "/json/messages")));
    assert!(!engine.accepts(&with_path(app_record(), "/json/typing")));
}

#[test]
fn explicit_path_bypasses_category_suppression() {
    let engine = engine(
        &["/json/messages"],
        FormatMode::ApplicationLog,
        CategoryToggles {
            exclude_other: true,
            ..CategoryToggles::default()
        },
    );

    assert!(engine.accepts(&with_path(app_record(), "/json/messages")));
    assert!(!engine.accepts(&with_path(app_record(), "/json/typing")));

    let mut with_query = with_path(app_record(), "/json/messages");
    with_query.full_path = "/json/messages?anchor=newest".to_string();
    assert!(engine.accepts(&with_query));
}

#[test]
fn all_lines_bypasses_category_suppression() {
    let classification = classify_terms(
        &["acme"],
        FormatMode::ApplicationLog,
        &CategoryToggles::default(),
    )
    .unwrap();
    let engine = FilterEngine::from_classification(
        &classification,
        None,
        CategoryToggles::default(),
        true,
    );

    assert!(engine.accepts(&with_path(app_record(), "/static/app.js")));
}

#[test]
fn client_substring_is_additive() {
    let classification = classify_terms(
        &["acme"],
        FormatMode::ApplicationLog,
        &CategoryToggles::default(),
    )
    .unwrap();
    let engine = FilterEngine::from_classification(
        &classification,
        Some("ZulipMobile".to_string()),
        CategoryToggles::default(),
        false,
    );

    assert!(engine.accepts(&app_record()));
    let mut browser = app_record();
    browser.user_agent = "Mozilla/5.0".to_string();
    assert!(!engine.accepts(&browser));
    assert!(!engine.has(FilterKind::Path));
    assert!(engine.has(FilterKind::Hostname));
}

#[test]
fn gateway_subdomain_filter() {
    let engine = engine(&["acme", "GET"], FormatMode::GatewayLog, CategoryToggles::default());

    assert!(engine.accepts(&gateway_record()));
    let mut other = gateway_record();
    other.hostname = "acmecorp.chat.example.com".to_string();
    assert!(!engine.accepts(&other));
}

#[test]
fn prefilter_keeps_every_line_the_structural_match_accepts() {
    let cases: [(&[&str], FormatMode, &str); 6] = [
        (&["acme", "200", "get"], FormatMode::ApplicationLog, APP_LINE),
        (&["12", "10.0.0.1"], FormatMode::ApplicationLog, APP_LINE),
        (&["2024-03-07 10:15"], FormatMode::ApplicationLog, APP_LINE),
        (&["/json/users", "2xx"], FormatMode::ApplicationLog, APP_LINE),
        (&["acme", "2024-03-07T10"], FormatMode::GatewayLog, GATEWAY_LINE),
        (&["acme.chat.example.com", "get"], FormatMode::GatewayLog, GATEWAY_LINE),
    ];

    for (terms, mode, line) in cases {
        let engine = engine(terms, mode, CategoryToggles::default());
        let record = parse_line(line, mode).expect("fixture parses");

        assert!(engine.accepts(&record), "{terms:?} should accept");
        assert!(engine.prefilter(line), "{terms:?} prefilter dropped a match");
    }
}

#[test]
fn prefilter_drops_lines_missing_a_literal() {
    let engine = engine(&["globex", "404"], FormatMode::ApplicationLog, CategoryToggles::default());

    assert!(!engine.prefilter(APP_LINE));
}

#[test]
fn prefilter_without_literals_keeps_everything() {
    let engine = engine(&["5xx"], FormatMode::ApplicationLog, CategoryToggles::default());

    assert!(engine.prefilter("anything at all"));
}

#[test]
fn needles_skip_status_blocks() {
    let engine = engine(&["acme", "get", "4xx"], FormatMode::ApplicationLog, CategoryToggles::default());

    assert_eq!(engine.needles(), ["acme".to_string(), "get".to_string()]);
}

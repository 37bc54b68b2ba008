//! End-to-end tests across the request and text helpers

use regex::Regex;
use request_utils::{
    clean_text, escape_reg_exp, get_contents, normalise_text, post_contents, Status,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The shared default client is exercised in a single runtime so its
/// connection pool never outlives the test that created it.
#[tokio::test]
async fn test_default_client_get_and_post() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/messages/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Café, déjà vu!"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_json(json!({"text": "Cafe deja vu"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "NotFound"})))
        .mount(&mock_server)
        .await;

    // Fetch, sanitise, and post back
    let fetched = get_contents(&format!("{}/messages/1", mock_server.uri())).await;
    assert_eq!(fetched.status, Status::Code(200));

    let text = fetched.data["text"].as_str().unwrap();
    let sanitised = clean_text(&normalise_text(text));
    assert_eq!(sanitised, "Cafe deja vu");

    let posted = post_contents(
        &format!("{}/messages", mock_server.uri()),
        &json!({"text": sanitised}),
    )
    .await;
    assert_eq!(posted.status, Status::Code(201));
    assert_eq!(posted.data, json!({"id": 2}));

    let missing = get_contents(&format!("{}/missing", mock_server.uri())).await;
    assert_eq!(missing.status, Status::Code(404));
    assert_eq!(missing.data, json!({"error": "NotFound"}));

    let broken = get_contents("not a url").await;
    assert_eq!(broken.status, Status::from("ERR_INVALID_URL"));
    assert_eq!(broken.data, json!(""));
}

#[test]
fn test_escaped_user_input_in_search_pattern() {
    let needle = "price (USD): $4.99?";
    let haystack = "Today's price (USD): $4.99? Maybe.";

    let re = Regex::new(&format!("(?i){}", escape_reg_exp(needle))).unwrap();
    let found = re.find(haystack).unwrap();
    assert_eq!(found.as_str(), needle);

    // Unescaped, the same text means something else entirely
    let raw = Regex::new(needle).unwrap();
    assert!(raw.find(haystack).map(|m| m.as_str()) != Some(needle));
}

#[test]
fn test_text_helpers_on_empty_input() {
    assert_eq!(escape_reg_exp(""), "");
    assert_eq!(clean_text(""), "");
    assert_eq!(normalise_text(""), "");
}

#[test]
fn test_normalise_then_clean_is_plain() {
    let input = "¡Ｈｏｌａ, señor Ærø! 𝟏𝟐𝟑";
    let plain = clean_text(&normalise_text(input));
    assert_eq!(plain, "Hola senor AEro 123");
}

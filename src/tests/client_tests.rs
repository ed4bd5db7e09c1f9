use crate::auth::flow::parse_callback_query;
use crate::client::parse_error_message;

#[test]
fn test_error_body_with_message_field() {
    let body = br#"{"message": "User not found"}"#;
    assert_eq!(parse_error_message(body, 404), "User not found");
}

#[test]
fn test_error_body_with_error_field() {
    let body = br#"{"error": "Company has members"}"#;
    assert_eq!(parse_error_message(body, 400), "Company has members");
}

#[test]
fn test_message_field_wins_over_error_field() {
    let body = br#"{"message": "primary", "error": "secondary"}"#;
    assert_eq!(parse_error_message(body, 400), "primary");
}

#[test]
fn test_unparseable_body_falls_back_to_status_line() {
    let body = b"<html>Bad Gateway</html>";
    assert_eq!(
        parse_error_message(body, 502),
        "Request failed with status 502"
    );
}

#[test]
fn test_empty_body_falls_back_to_status_line() {
    assert_eq!(parse_error_message(b"", 500), "Request failed with status 500");
}

#[test]
fn test_callback_query_extracts_code_and_state() {
    let query = parse_callback_query("/callback?code=abc123&state=xyz");
    assert_eq!(query.get("code").map(String::as_str), Some("abc123"));
    assert_eq!(query.get("state").map(String::as_str), Some("xyz"));
}

#[test]
fn test_callback_query_decodes_percent_encoding() {
    let query = parse_callback_query("/callback?error=access_denied&error_description=User%20cancelled");
    assert_eq!(
        query.get("error_description").map(String::as_str),
        Some("User cancelled")
    );
}

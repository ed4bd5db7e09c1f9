use chrono::{Duration, Utc};

use crate::auth::{Profile, Session, SessionState, TokenSet};
use crate::config::Config;
use crate::error::AdminError;

fn profile() -> Profile {
    Profile {
        sub: "user-123".to_string(),
        preferred_username: Some("jdoe".to_string()),
        name: Some("Jane Doe".to_string()),
    }
}

fn tokens(expires_at: Option<chrono::DateTime<Utc>>) -> TokenSet {
    TokenSet {
        access_token: "token-abc".to_string(),
        refresh_token: None,
        expires_at,
    }
}

#[test]
fn test_new_session_starts_loading() {
    let session = Session::in_memory(Config::default());
    assert_eq!(*session.state(), SessionState::Loading);
    assert!(!session.is_authenticated());
}

#[test]
fn test_anonymous_session_has_no_token() {
    let mut session = Session::in_memory(Config::default());
    session.clear();

    assert_eq!(*session.state(), SessionState::Anonymous);
    match session.access_token() {
        Err(AdminError::LoginRequired) => {}
        other => panic!("Expected LoginRequired, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_authenticated_session_exposes_token_and_principal() {
    let mut session = Session::in_memory(Config::default());
    session.set_tokens_for_test(tokens(None), profile());

    assert!(session.is_authenticated());
    assert_eq!(session.access_token().unwrap(), "token-abc");
    assert_eq!(session.principal().unwrap().label(), "Jane Doe");
}

#[test]
fn test_clear_drops_credentials() {
    let mut session = Session::in_memory(Config::default());
    session.set_tokens_for_test(tokens(None), profile());
    assert!(session.is_authenticated());

    session.clear();

    assert_eq!(*session.state(), SessionState::Anonymous);
    assert!(session.access_token().is_err());
    assert!(session.principal().is_none());
}

#[test]
fn test_token_expiry() {
    assert!(tokens(Some(Utc::now() - Duration::minutes(1))).is_expired());
    assert!(!tokens(Some(Utc::now() + Duration::minutes(10))).is_expired());
    // No expiry recorded means the token is trusted until the server rejects it.
    assert!(!tokens(None).is_expired());
}

#[test]
fn test_profile_label_precedence() {
    let mut p = profile();
    assert_eq!(p.label(), "Jane Doe");

    p.name = None;
    assert_eq!(p.label(), "jdoe");

    p.preferred_username = None;
    assert_eq!(p.label(), "user-123");
}

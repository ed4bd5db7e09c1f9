use crate::models::{Company, CompanyPayload, MeResponse, User, UserPayload};

#[test]
fn test_user_deserializes_camel_case_wire_format() {
    let json = r#"{
        "id": 5,
        "username": "jdoe",
        "email": "jane@example.com",
        "firstName": "Jane",
        "lastName": "Doe",
        "createdAt": "2024-05-01T12:30:00",
        "updatedAt": "2024-05-02T08:00:00",
        "companyIds": [1, 3]
    }"#;

    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, 5);
    assert_eq!(user.first_name.as_deref(), Some("Jane"));
    assert_eq!(user.company_ids, vec![1, 3]);
    assert!(user.is_member_of(3));
    assert!(!user.is_member_of(2));
}

#[test]
fn test_user_tolerates_missing_optional_fields() {
    let json = r#"{"id": 1, "username": "a", "email": "a@x.io"}"#;

    let user: User = serde_json::from_str(json).unwrap();
    assert!(user.first_name.is_none());
    assert!(user.company_ids.is_empty());
    assert_eq!(user.display_name(), "");
}

#[test]
fn test_user_display_name_halves() {
    let mut user: User =
        serde_json::from_str(r#"{"id": 1, "username": "a", "email": "a@x.io"}"#).unwrap();

    user.first_name = Some("Jane".to_string());
    assert_eq!(user.display_name(), "Jane");

    user.last_name = Some("Doe".to_string());
    assert_eq!(user.display_name(), "Jane Doe");

    user.first_name = None;
    assert_eq!(user.display_name(), "Doe");
}

#[test]
fn test_company_deserializes_camel_case_wire_format() {
    let json = r#"{
        "id": 9,
        "name": "Acme",
        "address": "12 Main St",
        "industry": "Manufacturing",
        "companySize": "51-200",
        "userIds": [4]
    }"#;

    let company: Company = serde_json::from_str(json).unwrap();
    assert_eq!(company.company_size.as_deref(), Some("51-200"));
    assert!(company.has_member(4));
}

#[test]
fn test_user_payload_serializes_camel_case_and_skips_empty_optionals() {
    let payload = UserPayload {
        username: "jdoe".to_string(),
        email: "jane@example.com".to_string(),
        first_name: Some("Jane".to_string()),
        last_name: None,
    };

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["username"], "jdoe");
    assert_eq!(value["firstName"], "Jane");
    assert!(value.get("lastName").is_none());
}

#[test]
fn test_company_payload_serializes_size_bucket() {
    let payload = CompanyPayload {
        name: "Acme".to_string(),
        address: None,
        industry: Some("Finance".to_string()),
        company_size: Some("11-50".to_string()),
    };

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["name"], "Acme");
    assert_eq!(value["companySize"], "11-50");
    assert!(value.get("address").is_none());
}

#[test]
fn test_me_response_with_synced_user() {
    let json = r#"{"user": {"id": 1, "username": "a", "email": "a@x.io"}, "authorities": []}"#;
    let me: MeResponse = serde_json::from_str(json).unwrap();
    assert!(me.user.is_some());
}

#[test]
fn test_me_response_before_sync() {
    let json = r#"{"username": "jdoe", "message": "User not synced yet."}"#;
    let me: MeResponse = serde_json::from_str(json).unwrap();
    assert!(me.user.is_none());
    assert_eq!(me.username.as_deref(), Some("jdoe"));
    assert!(me.message.unwrap().contains("not synced"));
}

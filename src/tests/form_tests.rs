use crate::interactive::app::{EntityForm, FormKind};
use crate::models::{Company, User, COMPANY_SIZES};

fn sample_user() -> User {
    User {
        id: 4,
        username: "jdoe".to_string(),
        email: "jane@example.com".to_string(),
        first_name: Some("Jane".to_string()),
        last_name: None,
        created_at: None,
        updated_at: None,
        company_ids: vec![1],
    }
}

fn sample_company() -> Company {
    Company {
        id: 2,
        name: "Acme".to_string(),
        address: None,
        industry: Some("Finance".to_string()),
        company_size: Some("11-50".to_string()),
        created_at: None,
        updated_at: None,
        user_ids: Vec::new(),
    }
}

#[test]
fn test_create_user_form_requires_username_and_email() {
    let form = EntityForm::create_user();

    // Untouched form: both required fields empty -> no request is built.
    assert!(form.to_user_payload().is_err());

    let mut form = EntityForm::create_user();
    for c in "jdoe".chars() {
        form.type_char(c);
    }
    // Email still missing.
    let err = form.to_user_payload().unwrap_err();
    assert!(err.contains("Email"));
}

#[test]
fn test_filled_create_user_form_builds_payload() {
    let mut form = EntityForm::create_user();
    for c in "jdoe".chars() {
        form.type_char(c);
    }
    form.next_field();
    for c in "jane@example.com".chars() {
        form.type_char(c);
    }

    let payload = form.to_user_payload().unwrap();
    assert_eq!(payload.username, "jdoe");
    assert_eq!(payload.email, "jane@example.com");
    assert!(payload.first_name.is_none());
}

#[test]
fn test_edit_form_prefills_from_entity() {
    let form = EntityForm::edit_user(&sample_user());
    assert_eq!(form.kind, FormKind::EditUser(4));

    let payload = form.to_user_payload().unwrap();
    assert_eq!(payload.username, "jdoe");
    assert_eq!(payload.first_name.as_deref(), Some("Jane"));
    assert!(payload.last_name.is_none());
}

#[test]
fn test_company_form_requires_name_only() {
    let form = EntityForm::create_company();
    assert!(form.to_company_payload().is_err());

    let mut form = EntityForm::create_company();
    for c in "Acme".chars() {
        form.type_char(c);
    }
    let payload = form.to_company_payload().unwrap();
    assert_eq!(payload.name, "Acme");
    assert!(payload.company_size.is_none());
}

#[test]
fn test_size_field_cycles_through_buckets() {
    let mut form = EntityForm::create_company();
    // Move to the size field (last one).
    form.prev_field();
    let size_index = form.active_field;
    assert!(form.fields[size_index].size_select);

    // Typing into a size field is ignored.
    form.type_char('x');
    assert_eq!(form.fields[size_index].value, "");

    form.cycle_size(true);
    assert_eq!(form.fields[size_index].value, COMPANY_SIZES[0]);

    for _ in 1..COMPANY_SIZES.len() {
        form.cycle_size(true);
    }
    assert_eq!(
        form.fields[size_index].value,
        COMPANY_SIZES[COMPANY_SIZES.len() - 1]
    );

    // One more wraps back to unset.
    form.cycle_size(true);
    assert_eq!(form.fields[size_index].value, "");

    // And backwards from unset lands on the last bucket.
    form.cycle_size(false);
    assert_eq!(
        form.fields[size_index].value,
        COMPANY_SIZES[COMPANY_SIZES.len() - 1]
    );
}

#[test]
fn test_edit_company_form_roundtrip() {
    let form = EntityForm::edit_company(&sample_company());
    let payload = form.to_company_payload().unwrap();

    assert_eq!(payload.name, "Acme");
    assert_eq!(payload.industry.as_deref(), Some("Finance"));
    assert_eq!(payload.company_size.as_deref(), Some("11-50"));
    assert!(payload.address.is_none());
}

#[test]
fn test_field_navigation_wraps() {
    let mut form = EntityForm::create_user();
    assert_eq!(form.active_field, 0);

    form.prev_field();
    assert_eq!(form.active_field, form.fields.len() - 1);

    form.next_field();
    assert_eq!(form.active_field, 0);
}

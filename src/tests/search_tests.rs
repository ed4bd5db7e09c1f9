use crate::models::{Company, User};
use crate::search::{filter_collection, matches_search, partition_companies, partition_users};

fn user(id: u64, username: &str, email: &str, first: Option<&str>, last: Option<&str>) -> User {
    User {
        id,
        username: username.to_string(),
        email: email.to_string(),
        first_name: first.map(str::to_string),
        last_name: last.map(str::to_string),
        created_at: None,
        updated_at: None,
        company_ids: Vec::new(),
    }
}

fn company(id: u64, name: &str, address: Option<&str>, industry: Option<&str>) -> Company {
    Company {
        id,
        name: name.to_string(),
        address: address.map(str::to_string),
        industry: industry.map(str::to_string),
        company_size: None,
        created_at: None,
        updated_at: None,
        user_ids: Vec::new(),
    }
}

#[test]
fn test_user_search_matches_each_field_case_insensitively() {
    let u = user(1, "jdoe", "jane@example.com", Some("Jane"), Some("Doe"));

    assert!(matches_search(&u, "JDOE"));
    assert!(matches_search(&u, "example.com"));
    assert!(matches_search(&u, "jane"));
    assert!(matches_search(&u, "dOe"));
}

#[test]
fn test_user_search_excludes_non_matches() {
    let u = user(1, "jdoe", "jane@example.com", Some("Jane"), Some("Doe"));
    assert!(!matches_search(&u, "smith"));
}

#[test]
fn test_empty_term_matches_everything() {
    let u = user(1, "jdoe", "jane@example.com", None, None);
    assert!(matches_search(&u, ""));
}

#[test]
fn test_missing_optional_fields_are_skipped() {
    let u = user(1, "jdoe", "jane@example.com", None, None);
    assert!(!matches_search(&u, "jane doe"));
}

#[test]
fn test_company_search_covers_name_address_industry() {
    let c = company(7, "Acme", Some("12 Main St"), Some("Manufacturing"));

    assert!(matches_search(&c, "acme"));
    assert!(matches_search(&c, "main st"));
    assert!(matches_search(&c, "MANUF"));
    assert!(!matches_search(&c, "finance"));
}

#[test]
fn test_filter_collection_returns_entity_iff_term_matches() {
    let users = vec![
        user(1, "alice", "alice@corp.io", Some("Alice"), None),
        user(2, "bob", "bob@corp.io", None, Some("Builder")),
        user(3, "carol", "carol@other.net", None, None),
    ];

    let filtered = filter_collection(&users, "corp.io");
    let ids: Vec<u64> = filtered.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let filtered = filter_collection(&users, "builder");
    let ids: Vec<u64> = filtered.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![2]);

    assert_eq!(filter_collection(&users, "").len(), 3);
    assert!(filter_collection(&users, "zzz").is_empty());
}

#[test]
fn test_partition_companies_related_and_available() {
    let mut u = user(1, "alice", "alice@corp.io", None, None);
    u.company_ids = vec![1, 3];

    let companies = vec![
        company(1, "One", None, None),
        company(2, "Two", None, None),
        company(3, "Three", None, None),
    ];

    let (related, available) = partition_companies(&u, &companies);
    let related_ids: Vec<u64> = related.iter().map(|c| c.id).collect();
    let available_ids: Vec<u64> = available.iter().map(|c| c.id).collect();

    assert_eq!(related_ids, vec![1, 3]);
    assert_eq!(available_ids, vec![2]);
}

#[test]
fn test_partition_users_mirrors_membership() {
    let mut c = company(9, "Acme", None, None);
    c.user_ids = vec![2];

    let users = vec![
        user(1, "alice", "a@x.io", None, None),
        user(2, "bob", "b@x.io", None, None),
    ];

    let (members, available) = partition_users(&c, &users);
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, 2);
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, 1);
}

#[test]
fn test_partition_with_no_memberships() {
    let u = user(1, "alice", "a@x.io", None, None);
    let companies = vec![company(1, "One", None, None), company(2, "Two", None, None)];

    let (related, available) = partition_companies(&u, &companies);
    assert!(related.is_empty());
    assert_eq!(available.len(), 2);
}

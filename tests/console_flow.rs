//! Integration tests for the console's client-side behavior: list filtering,
//! delete bookkeeping, membership partitioning, and the key-to-action layer,
//! all through the public API.

use crossterm::event::{KeyCode, KeyEvent};
use orgadmin_cli::interactive::app::{App, ConfirmAction, Popup, View};
use orgadmin_cli::interactive::keys::{map_key, Action};
use orgadmin_cli::search::partition_companies;
use orgadmin_cli::stats::DashboardStats;
use orgadmin_cli::{ApiClient, Company, Config, Session, User};

fn user(id: u64, username: &str, email: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "username": username,
        "email": email,
    }))
    .unwrap()
}

fn company(id: u64, name: &str) -> Company {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
    }))
    .unwrap()
}

fn test_app() -> App {
    let config = Config::default();
    let client = ApiClient::new(config.resource_server_url());
    App::new(Session::in_memory(config), client)
}

#[test]
fn search_narrows_user_list_and_clamps_selection() {
    let mut app = test_app();
    app.view = View::Users;
    app.users = vec![
        user(1, "alice", "alice@corp.io"),
        user(2, "bob", "bob@corp.io"),
        user(3, "carol", "carol@other.net"),
    ];
    app.apply_filter();
    app.selected_index = 2;

    app.search_query = "corp.io".to_string();
    app.apply_filter();

    assert_eq!(app.filtered_users.len(), 2);
    // Selection is clamped to the filtered collection.
    assert_eq!(app.selected_index, 1);

    app.search_query.clear();
    app.apply_filter();
    assert_eq!(app.filtered_users.len(), 3);
}

#[test]
fn delete_confirm_targets_the_selected_entity_only() {
    let mut app = test_app();
    app.view = View::Users;
    app.users = vec![user(1, "alice", "a@x.io"), user(2, "bob", "b@x.io")];
    app.apply_filter();
    app.selected_index = 1;

    app.open_delete_confirm();
    match app.popup.take() {
        Some(Popup::Confirm(ConfirmAction::DeleteUser(id))) => assert_eq!(id, 2),
        _ => panic!("Expected a delete confirmation for user 2"),
    }

    // After the server acknowledges, exactly that user leaves local state.
    app.users.retain(|u| u.id != 2);
    app.apply_filter();
    let ids: Vec<u64> = app.filtered_users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn membership_partition_matches_the_id_set() {
    let mut u = user(10, "alice", "a@x.io");
    u.company_ids = vec![1, 3];

    let companies = vec![company(1, "One"), company(2, "Two"), company(3, "Three")];
    let (related, available) = partition_companies(&u, &companies);

    assert_eq!(related.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(available.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn dashboard_stats_count_fetched_collections() {
    let users: Vec<User> = (1..=4).map(|i| user(i, "u", "u@x.io")).collect();
    let companies: Vec<Company> = (1..=9).map(|i| company(i, "c")).collect();

    let stats = DashboardStats::compute(&users, &companies);
    assert_eq!(stats.total_users, users.len());
    assert_eq!(stats.total_companies, companies.len());
}

#[test]
fn unauthorized_routes_to_login_view() {
    let mut app = test_app();
    app.view = View::Users;

    app.fail(orgadmin_cli::AdminError::Unauthorized);

    assert_eq!(app.view, View::Login);
    assert!(app.session.access_token().is_err());
    assert!(!app.notifications.is_empty());
}

#[test]
fn list_keys_map_to_entity_actions() {
    let none = None;

    let action = map_key(KeyEvent::from(KeyCode::Char('d')), View::Users, &none, false);
    assert_eq!(action, Action::DeleteEntity);

    let action = map_key(KeyEvent::from(KeyCode::Char('/')), View::Companies, &none, false);
    assert_eq!(action, Action::StartSearch);

    let action = map_key(KeyEvent::from(KeyCode::Enter), View::Users, &none, false);
    assert_eq!(action, Action::Select);
}

#[test]
fn confirm_popup_requires_explicit_yes() {
    let popup = Some(Popup::Confirm(ConfirmAction::DeleteUser(1)));

    let yes = map_key(KeyEvent::from(KeyCode::Char('y')), View::Users, &popup, false);
    assert_eq!(yes, Action::Confirm);

    let no = map_key(KeyEvent::from(KeyCode::Char('n')), View::Users, &popup, false);
    assert_eq!(no, Action::Cancel);

    // Any unrelated key is ignored while the dialog is open.
    let other = map_key(KeyEvent::from(KeyCode::Char('d')), View::Users, &popup, false);
    assert_eq!(other, Action::None);
}

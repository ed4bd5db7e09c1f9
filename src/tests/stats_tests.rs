use crate::models::{Company, User};
use crate::stats::DashboardStats;

fn user(id: u64) -> User {
    User {
        id,
        username: format!("user{}", id),
        email: format!("user{}@x.io", id),
        first_name: None,
        last_name: None,
        created_at: None,
        updated_at: None,
        company_ids: Vec::new(),
    }
}

fn company(id: u64) -> Company {
    Company {
        id,
        name: format!("company{}", id),
        address: None,
        industry: None,
        company_size: None,
        created_at: None,
        updated_at: None,
        user_ids: Vec::new(),
    }
}

#[test]
fn test_totals_equal_collection_lengths() {
    let users: Vec<User> = (1..=7).map(user).collect();
    let companies: Vec<Company> = (1..=2).map(company).collect();

    let stats = DashboardStats::compute(&users, &companies);
    assert_eq!(stats.total_users, 7);
    assert_eq!(stats.total_companies, 2);
}

#[test]
fn test_recent_lists_are_newest_five_in_reverse_order() {
    let users: Vec<User> = (1..=8).map(user).collect();
    let stats = DashboardStats::compute(&users, &[]);

    let ids: Vec<u64> = stats.recent_users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![8, 7, 6, 5, 4]);
}

#[test]
fn test_recent_lists_with_fewer_than_five() {
    let companies: Vec<Company> = (1..=3).map(company).collect();
    let stats = DashboardStats::compute(&[], &companies);

    let ids: Vec<u64> = stats.recent_companies.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert_eq!(stats.total_users, 0);
}

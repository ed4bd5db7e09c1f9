use crate::models::{Company, User};

/// Aggregates shown on the dashboard, derived purely from the fetched
/// collections.
#[derive(Debug, Default)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_companies: usize,
    pub recent_users: Vec<User>,
    pub recent_companies: Vec<Company>,
}

const RECENT_COUNT: usize = 5;

impl DashboardStats {
    /// The collections arrive oldest-first from the resource server, so
    /// "recent" is the tail, reversed to newest-first.
    pub fn compute(users: &[User], companies: &[Company]) -> Self {
        Self {
            total_users: users.len(),
            total_companies: companies.len(),
            recent_users: tail_newest_first(users),
            recent_companies: tail_newest_first(companies),
        }
    }
}

fn tail_newest_first<T: Clone>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .rev()
        .take(RECENT_COUNT)
        .cloned()
        .collect()
}

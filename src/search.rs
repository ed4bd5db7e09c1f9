//! Client-side set operations over fetched snapshots: the substring search
//! applied by the list views, and the related/available membership partition
//! used by the detail views. Nothing here talks to the network.

use crate::models::{Company, User};

/// Entities that expose a set of fields the list-view search looks at.
pub trait Searchable {
    fn searchable_fields(&self) -> Vec<&str>;
}

impl Searchable for User {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.username.as_str(), self.email.as_str()];
        if let Some(first) = &self.first_name {
            fields.push(first.as_str());
        }
        if let Some(last) = &self.last_name {
            fields.push(last.as_str());
        }
        fields
    }
}

impl Searchable for Company {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(address) = &self.address {
            fields.push(address.as_str());
        }
        if let Some(industry) = &self.industry {
            fields.push(industry.as_str());
        }
        fields
    }
}

/// Case-insensitive substring match across every searchable field. An empty
/// term matches everything.
pub fn matches_search<T: Searchable>(entity: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    entity
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

pub fn filter_collection<T: Searchable + Clone>(collection: &[T], term: &str) -> Vec<T> {
    collection
        .iter()
        .filter(|e| matches_search(*e, term))
        .cloned()
        .collect()
}

/// Split the full company collection into (related, available) with respect
/// to one user's membership set.
pub fn partition_companies(user: &User, all: &[Company]) -> (Vec<Company>, Vec<Company>) {
    all.iter()
        .cloned()
        .partition(|c| user.is_member_of(c.id))
}

/// Split the full user collection into (related, available) with respect to
/// one company's membership set.
pub fn partition_users(company: &Company, all: &[User]) -> (Vec<User>, Vec<User>) {
    all.iter()
        .cloned()
        .partition(|u| company.has_member(u.id))
}

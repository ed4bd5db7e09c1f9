pub mod auth;
pub mod companies;
pub mod configure;
pub mod dashboard;
pub mod users;

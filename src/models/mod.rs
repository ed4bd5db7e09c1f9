pub mod company;
pub mod user;

pub use company::{Company, CompanyPayload, COMPANY_SIZES};
pub use user::{User, UserPayload};

use serde::Deserialize;

/// Response of `GET /users/me`. The resource server returns the synced user
/// record when one exists, otherwise a hint message telling the caller to run
/// a sync first.
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: Option<User>,
    pub username: Option<String>,
    pub message: Option<String>,
}

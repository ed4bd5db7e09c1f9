use serde::{Deserialize, Serialize};

/// The size buckets the resource server accepts for `companySize`.
pub const COMPANY_SIZES: [&str; 5] = ["1-10", "11-50", "51-200", "201-500", "501+"];

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Company {
    pub id: u64,
    pub name: String,
    pub address: Option<String>,
    pub industry: Option<String>,
    #[serde(rename = "companySize")]
    pub company_size: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(rename = "userIds", default)]
    pub user_ids: Vec<u64>,
}

impl Company {
    pub fn has_member(&self, user_id: u64) -> bool {
        self.user_ids.contains(&user_id)
    }
}

/// Body for both create (POST) and update (PUT).
#[derive(Debug, Default, Serialize, Clone)]
pub struct CompanyPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(rename = "companySize", skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
}

impl CompanyPayload {
    pub fn from_company(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            address: company.address.clone(),
            industry: company.industry.clone(),
            company_size: company.company_size.clone(),
        }
    }
}

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AdminError, AdminResult};
use crate::models::{Company, CompanyPayload, MeResponse, User, UserPayload};

/// Client for the resource server's REST API. Every operation takes the
/// bearer token explicitly so the session stays the single owner of
/// credentials; the client itself only knows the base URL.
///
/// One request per operation: no retries, no timeouts, no batching. A 401
/// maps to [`AdminError::Unauthorized`] so callers can clear the session.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pull a human-readable message out of an error response body, falling back
/// to a generic status line when the body is not the expected JSON shape.
pub fn parse_error_message(body: &[u8], status: u16) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.message.or(e.error))
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<Value>,
    ) -> AdminResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url).bearer_auth(token);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(AdminError::Unauthorized);
        }

        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            return Err(AdminError::Api {
                status: status.as_u16(),
                message: parse_error_message(&bytes, status.as_u16()),
            });
        }

        Ok(response.json().await?)
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub async fn list_users(&self, token: &str) -> AdminResult<Vec<User>> {
        self.request(Method::GET, "/users", token, None).await
    }

    pub async fn get_user(&self, token: &str, id: u64) -> AdminResult<User> {
        self.request(Method::GET, &format!("/users/{}", id), token, None)
            .await
    }

    pub async fn get_user_by_username(&self, token: &str, username: &str) -> AdminResult<User> {
        self.request(
            Method::GET,
            &format!("/users/username/{}", username),
            token,
            None,
        )
        .await
    }

    pub async fn current_user(&self, token: &str) -> AdminResult<MeResponse> {
        self.request(Method::GET, "/users/me", token, None).await
    }

    /// Creates or refreshes the caller's own record on the resource server
    /// from the authorization-server identity.
    pub async fn sync_current_user(&self, token: &str) -> AdminResult<User> {
        self.request(Method::POST, "/users/sync", token, None).await
    }

    pub async fn create_user(&self, token: &str, payload: &UserPayload) -> AdminResult<User> {
        self.request(
            Method::POST,
            "/users",
            token,
            Some(serde_json::to_value(payload)?),
        )
        .await
    }

    pub async fn update_user(
        &self,
        token: &str,
        id: u64,
        payload: &UserPayload,
    ) -> AdminResult<User> {
        self.request(
            Method::PUT,
            &format!("/users/{}", id),
            token,
            Some(serde_json::to_value(payload)?),
        )
        .await
    }

    pub async fn delete_user(&self, token: &str, id: u64) -> AdminResult<()> {
        let _: Value = self
            .request(Method::DELETE, &format!("/users/{}", id), token, None)
            .await?;
        Ok(())
    }

    pub async fn add_user_to_company(
        &self,
        token: &str,
        user_id: u64,
        company_id: u64,
    ) -> AdminResult<User> {
        self.request(
            Method::POST,
            &format!("/users/{}/companies/{}", user_id, company_id),
            token,
            None,
        )
        .await
    }

    pub async fn remove_user_from_company(
        &self,
        token: &str,
        user_id: u64,
        company_id: u64,
    ) -> AdminResult<User> {
        self.request(
            Method::DELETE,
            &format!("/users/{}/companies/{}", user_id, company_id),
            token,
            None,
        )
        .await
    }

    pub async fn users_by_company(&self, token: &str, company_id: u64) -> AdminResult<Vec<User>> {
        self.request(
            Method::GET,
            &format!("/users/company/{}", company_id),
            token,
            None,
        )
        .await
    }

    // ------------------------------------------------------------------
    // Companies
    // ------------------------------------------------------------------

    pub async fn list_companies(&self, token: &str) -> AdminResult<Vec<Company>> {
        self.request(Method::GET, "/companies", token, None).await
    }

    pub async fn get_company(&self, token: &str, id: u64) -> AdminResult<Company> {
        self.request(Method::GET, &format!("/companies/{}", id), token, None)
            .await
    }

    pub async fn get_company_by_name(&self, token: &str, name: &str) -> AdminResult<Company> {
        self.request(Method::GET, &format!("/companies/name/{}", name), token, None)
            .await
    }

    pub async fn companies_by_industry(
        &self,
        token: &str,
        industry: &str,
    ) -> AdminResult<Vec<Company>> {
        self.request(
            Method::GET,
            &format!("/companies/industry/{}", industry),
            token,
            None,
        )
        .await
    }

    pub async fn create_company(
        &self,
        token: &str,
        payload: &CompanyPayload,
    ) -> AdminResult<Company> {
        self.request(
            Method::POST,
            "/companies",
            token,
            Some(serde_json::to_value(payload)?),
        )
        .await
    }

    pub async fn update_company(
        &self,
        token: &str,
        id: u64,
        payload: &CompanyPayload,
    ) -> AdminResult<Company> {
        self.request(
            Method::PUT,
            &format!("/companies/{}", id),
            token,
            Some(serde_json::to_value(payload)?),
        )
        .await
    }

    pub async fn delete_company(&self, token: &str, id: u64) -> AdminResult<()> {
        let _: Value = self
            .request(Method::DELETE, &format!("/companies/{}", id), token, None)
            .await?;
        Ok(())
    }

    pub async fn add_company_member(
        &self,
        token: &str,
        company_id: u64,
        user_id: u64,
    ) -> AdminResult<Company> {
        self.request(
            Method::POST,
            &format!("/companies/{}/users/{}", company_id, user_id),
            token,
            None,
        )
        .await
    }

    pub async fn remove_company_member(
        &self,
        token: &str,
        company_id: u64,
        user_id: u64,
    ) -> AdminResult<Company> {
        self.request(
            Method::DELETE,
            &format!("/companies/{}/users/{}", company_id, user_id),
            token,
            None,
        )
        .await
    }

    pub async fn companies_by_user(&self, token: &str, user_id: u64) -> AdminResult<Vec<Company>> {
        self.request(
            Method::GET,
            &format!("/companies/user/{}", user_id),
            token,
            None,
        )
        .await
    }
}

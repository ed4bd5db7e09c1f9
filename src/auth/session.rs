//! The session provider: an explicitly scoped object owning the operator's
//! credentials and identity for the lifetime of the process. Views receive
//! it by reference; there is no ambient global.

use std::env;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::flow::{self, AuthRequest, CallbackParams};
use crate::config::Config;
use crate::constants::{END_SESSION_ENDPOINT, ENV_TOKEN, SESSION_FILE};
use crate::error::{AdminError, AdminResult};
use crate::logging::{log_debug, log_info};

/// Profile claims from the issuer's userinfo endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub sub: String,
    pub preferred_username: Option<String>,
    pub name: Option<String>,
}

impl Profile {
    /// Best label for the operator: name, then username, then subject.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.preferred_username.as_deref())
            .unwrap_or(&self.sub)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenSet {
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => at <= Utc::now(),
            None => false,
        }
    }
}

/// What gets written to the session file between runs.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    tokens: TokenSet,
    profile: Profile,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Store not consulted yet.
    Loading,
    Anonymous,
    Authenticated(Profile),
}

pub struct Session {
    config: Config,
    state: SessionState,
    tokens: Option<TokenSet>,
    /// None for in-memory sessions (tests, env-token override); nothing is
    /// persisted then.
    store_path: Option<PathBuf>,
}

impl Session {
    /// Fresh session that has not consulted any store yet.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: SessionState::Loading,
            tokens: None,
            store_path: default_store_path(),
        }
    }

    /// Session that never touches the filesystem.
    pub fn in_memory(config: Config) -> Self {
        Self {
            config,
            state: SessionState::Loading,
            tokens: None,
            store_path: None,
        }
    }

    /// Resolve the session from the environment or the session file. An
    /// `ORGADMIN_TOKEN` variable wins and is never persisted. A stored but
    /// expired token set leaves the session anonymous.
    pub fn load(config: Config) -> Self {
        if let Ok(token) = env::var(ENV_TOKEN) {
            let profile = Profile {
                sub: "env-token".to_string(),
                preferred_username: None,
                name: None,
            };
            let mut session = Self::in_memory(config);
            session.tokens = Some(TokenSet {
                access_token: token,
                refresh_token: None,
                expires_at: None,
            });
            session.state = SessionState::Authenticated(profile);
            return session;
        }

        let mut session = Self::new(config);
        session.resolve_from_store();
        session
    }

    fn resolve_from_store(&mut self) {
        let stored = self
            .store_path
            .as_ref()
            .filter(|p| p.exists())
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str::<StoredSession>(&s).ok());

        match stored {
            Some(stored) if !stored.tokens.is_expired() => {
                log_debug("Restored session from store");
                self.tokens = Some(stored.tokens);
                self.state = SessionState::Authenticated(stored.profile);
            }
            Some(_) => {
                log_debug("Stored session expired; starting anonymous");
                self.state = SessionState::Anonymous;
            }
            None => {
                self.state = SessionState::Anonymous;
            }
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    pub fn principal(&self) -> Option<&Profile> {
        match &self.state {
            SessionState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn access_token(&self) -> AdminResult<String> {
        self.tokens
            .as_ref()
            .map(|t| t.access_token.clone())
            .ok_or(AdminError::LoginRequired)
    }

    /// Build the authorization request that starts a login. The caller is
    /// responsible for getting the URL in front of the operator.
    pub fn begin_login(&self) -> AdminResult<AuthRequest> {
        flow::build_authorize_url(&self.config)
    }

    /// Complete a login from the callback parameters: validate state,
    /// exchange the code, fetch profile claims, persist, and transition to
    /// Authenticated. Any failure leaves the session unchanged.
    pub async fn complete_login(
        &mut self,
        request: &AuthRequest,
        params: CallbackParams,
    ) -> AdminResult<Profile> {
        if params.state != request.state {
            return Err(AdminError::Auth(
                "State mismatch in login callback".to_string(),
            ));
        }

        let tokens = flow::exchange_code(&self.config, &params.code, &request.verifier).await?;
        let profile = flow::fetch_userinfo(&self.config, &tokens.access_token).await?;

        self.tokens = Some(tokens);
        self.state = SessionState::Authenticated(profile.clone());
        self.persist();

        log_info(&format!("Logged in as {}", profile.label()));
        Ok(profile)
    }

    /// Full interactive login: open the browser (handing the URL to
    /// `on_url` either way), wait for the loopback redirect, and complete
    /// the exchange.
    pub async fn login<F: FnMut(&str)>(&mut self, mut on_url: F) -> AdminResult<Profile> {
        let request = self.begin_login()?;
        on_url(&request.url);
        flow::open_browser(&request.url);

        let params = flow::await_callback(self.config.redirect_port()).await?;
        self.complete_login(&request, params).await
    }

    /// Sign out: best-effort end-session call to the issuer, then clear the
    /// local store regardless of the remote outcome.
    pub async fn logout(&mut self) {
        if self.tokens.is_some() {
            let url = format!("{}{}", self.config.issuer_url(), END_SESSION_ENDPOINT);
            match reqwest::Client::new().get(&url).send().await {
                Ok(_) => log_debug("End-session request sent"),
                Err(e) => log_debug(&format!("End-session request failed: {}", e)),
            }
        }
        self.clear();
    }

    /// Drop all local credentials. Called on logout and whenever the
    /// resource server answers 401.
    pub fn clear(&mut self) {
        self.tokens = None;
        self.state = SessionState::Anonymous;
        if let Some(path) = &self.store_path {
            let _ = fs::remove_file(path);
        }
    }

    fn persist(&self) {
        let (Some(path), Some(tokens), SessionState::Authenticated(profile)) =
            (&self.store_path, &self.tokens, &self.state)
        else {
            return;
        };

        let stored = StoredSession {
            tokens: tokens.clone(),
            profile: profile.clone(),
        };
        if let Ok(json) = serde_json::to_string_pretty(&stored) {
            let _ = fs::write(path, json);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub fn set_tokens_for_test(&mut self, tokens: TokenSet, profile: Profile) {
        self.tokens = Some(tokens);
        self.state = SessionState::Authenticated(profile);
    }
}

fn default_store_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SESSION_FILE))
}

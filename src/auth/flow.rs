//! Mechanics of the OAuth2 Authorization Code + PKCE flow: building the
//! authorize URL, catching the loopback redirect, and exchanging the code at
//! the token endpoint. The session module drives these; nothing here mutates
//! session state.

use std::collections::HashMap;
use std::process::Command;

use chrono::{Duration, Utc};
use serde::Deserialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

use crate::auth::pkce;
use crate::auth::session::{Profile, TokenSet};
use crate::config::Config;
use crate::constants::{AUTHORIZE_ENDPOINT, CALLBACK_PATH, OAUTH_SCOPES, TOKEN_ENDPOINT, USERINFO_ENDPOINT};
use crate::error::{AdminError, AdminResult};
use crate::logging::log_debug;

/// A prepared authorization request: the URL to send the operator to, plus
/// the state and PKCE verifier needed to validate and complete the callback.
pub struct AuthRequest {
    pub url: String,
    pub state: String,
    pub verifier: String,
}

/// Query parameters delivered to the loopback redirect.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackParams {
    pub code: String,
    pub state: String,
}

pub fn build_authorize_url(config: &Config) -> AdminResult<AuthRequest> {
    let state = pkce::generate_state();
    let verifier = pkce::generate_verifier();
    let challenge = pkce::challenge_s256(&verifier);

    let mut url = Url::parse(&format!("{}{}", config.issuer_url(), AUTHORIZE_ENDPOINT))
        .map_err(|e| AdminError::Auth(format!("Invalid issuer URL: {}", e)))?;

    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id())
        .append_pair("redirect_uri", &config.redirect_uri())
        .append_pair("response_type", "code")
        .append_pair("scope", OAUTH_SCOPES)
        .append_pair("state", &state)
        .append_pair("code_challenge", &challenge)
        .append_pair("code_challenge_method", "S256");

    Ok(AuthRequest {
        url: url.to_string(),
        state,
        verifier,
    })
}

/// Listen on the loopback redirect port until the authorization server sends
/// the operator's browser back with a code. Serves a one-line confirmation
/// page and returns the query parameters.
pub async fn await_callback(port: u16) -> AdminResult<CallbackParams> {
    let listener = TcpListener::bind(("127.0.0.1", port))
        .await
        .map_err(|e| AdminError::Auth(format!("Could not listen on port {}: {}", port, e)))?;

    loop {
        let (mut stream, _) = listener.accept().await?;

        let mut buf = vec![0u8; 4096];
        let n = stream.read(&mut buf).await?;
        let request = String::from_utf8_lossy(&buf[..n]).to_string();

        let path = match request.split_whitespace().nth(1) {
            Some(p) => p.to_string(),
            None => continue,
        };

        if !path.starts_with(CALLBACK_PATH) {
            // Browsers also ask for favicons; answer and keep waiting.
            let _ = stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n")
                .await;
            continue;
        }

        let query = parse_callback_query(&path);

        if let Some(error) = query.get("error") {
            let description = query
                .get("error_description")
                .cloned()
                .unwrap_or_else(|| "authorization denied".to_string());
            respond_html(&mut stream, "Login failed. You can close this tab.").await;
            return Err(AdminError::Auth(format!("{}: {}", error, description)));
        }

        match (query.get("code"), query.get("state")) {
            (Some(code), Some(state)) => {
                respond_html(&mut stream, "Login complete. You can close this tab.").await;
                return Ok(CallbackParams {
                    code: code.clone(),
                    state: state.clone(),
                });
            }
            _ => {
                respond_html(&mut stream, "Missing code in callback.").await;
                return Err(AdminError::Auth(
                    "Callback did not include an authorization code".to_string(),
                ));
            }
        }
    }
}

pub(crate) fn parse_callback_query(path: &str) -> HashMap<String, String> {
    Url::parse(&format!("http://localhost{}", path))
        .map(|url| {
            url.query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .unwrap_or_default()
}

async fn respond_html(stream: &mut tokio::net::TcpStream, message: &str) {
    let body = format!(
        "<html><body><h2>orgadmin</h2><p>{}</p></body></html>",
        message
    );
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
}

/// Exchange the authorization code for a token set at the issuer's token
/// endpoint.
pub async fn exchange_code(config: &Config, code: &str, verifier: &str) -> AdminResult<TokenSet> {
    let client_id = config.client_id();
    let redirect_uri = config.redirect_uri();

    let mut params = HashMap::new();
    params.insert("grant_type", "authorization_code");
    params.insert("code", code);
    params.insert("redirect_uri", redirect_uri.as_str());
    params.insert("client_id", client_id.as_str());
    params.insert("code_verifier", verifier);

    let response = reqwest::Client::new()
        .post(format!("{}{}", config.issuer_url(), TOKEN_ENDPOINT))
        .header("Accept", "application/json")
        .form(&params)
        .send()
        .await
        .map_err(|e| AdminError::Auth(format!("Token request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AdminError::Auth(format!(
            "Token endpoint returned {}: {}",
            status, body
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| AdminError::Auth(format!("Malformed token response: {}", e)))?;

    Ok(TokenSet {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        expires_at: token
            .expires_in
            .map(|seconds| Utc::now() + Duration::seconds(seconds)),
    })
}

/// Fetch the operator's profile claims from the issuer's userinfo endpoint.
pub async fn fetch_userinfo(config: &Config, access_token: &str) -> AdminResult<Profile> {
    let response = reqwest::Client::new()
        .get(format!("{}{}", config.issuer_url(), USERINFO_ENDPOINT))
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| AdminError::Auth(format!("Userinfo request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(AdminError::Auth(format!(
            "Userinfo endpoint returned {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| AdminError::Auth(format!("Malformed userinfo response: {}", e)))
}

/// Best-effort launch of the system browser. Returns false when no opener
/// could be spawned, in which case the caller should surface the URL.
pub fn open_browser(url: &str) -> bool {
    let candidates: &[(&str, &[&str])] = if cfg!(target_os = "macos") {
        &[("open", &[])]
    } else if cfg!(target_os = "windows") {
        &[("cmd", &["/C", "start", ""])]
    } else {
        &[("xdg-open", &[]), ("sensible-browser", &[])]
    };

    for (program, args) in candidates {
        let spawned = Command::new(program).args(*args).arg(url).spawn();
        if spawned.is_ok() {
            log_debug(&format!("Opened browser via {}", program));
            return true;
        }
    }

    false
}

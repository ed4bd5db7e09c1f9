use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::constants::{
    CONFIG_FILE, DEFAULT_CLIENT_ID, DEFAULT_ISSUER_URL, DEFAULT_REDIRECT_PORT,
    DEFAULT_RESOURCE_SERVER_URL, ENV_ISSUER_URL, ENV_RESOURCE_URL,
};
use crate::error::{AdminError, AdminResult};

/// Persisted settings for reaching the two servers. Every field is optional;
/// unset fields fall back to environment variables and then to the localhost
/// defaults used by the development stack.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    pub resource_server_url: Option<String>,
    pub issuer_url: Option<String>,
    pub client_id: Option<String>,
    pub redirect_port: Option<u16>,
}

impl Config {
    pub fn resource_server_url(&self) -> String {
        env::var(ENV_RESOURCE_URL)
            .ok()
            .or_else(|| self.resource_server_url.clone())
            .unwrap_or_else(|| DEFAULT_RESOURCE_SERVER_URL.to_string())
    }

    pub fn issuer_url(&self) -> String {
        env::var(ENV_ISSUER_URL)
            .ok()
            .or_else(|| self.issuer_url.clone())
            .unwrap_or_else(|| DEFAULT_ISSUER_URL.to_string())
    }

    pub fn client_id(&self) -> String {
        self.client_id
            .clone()
            .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string())
    }

    pub fn redirect_port(&self) -> u16 {
        self.redirect_port.unwrap_or(DEFAULT_REDIRECT_PORT)
    }

    pub fn redirect_uri(&self) -> String {
        format!(
            "http://localhost:{}{}",
            self.redirect_port(),
            crate::constants::CALLBACK_PATH
        )
    }
}

pub fn load_config() -> Config {
    let config_path = match dirs::home_dir() {
        Some(home) => home.join(CONFIG_FILE),
        None => return Config::default(),
    };

    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).unwrap_or_default();
        serde_json::from_str(&config_str).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> AdminResult<()> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| AdminError::Config("Could not find home directory".to_string()))?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

use serde::Deserialize;
use std::fs;

use crate::transport::DEFAULT_ENDPOINT;

const APP_KEY_VAR: &str = "BETTING_APP_KEY";
const SESSION_TOKEN_VAR: &str = "BETTING_SESSION_TOKEN";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub credentials: Credentials,
    #[serde(default)]
    pub general: General,
}

#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub app_key: String,
    #[serde(default)]
    pub session_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct General {
    pub log_level: String,
    /// Language for names and descriptions in results, e.g. "en".
    pub locale: Option<String>,
    pub endpoint: String,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            locale: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Load from a TOML file, then let `BETTING_APP_KEY` and
    /// `BETTING_SESSION_TOKEN` (optionally from `.env`) override the
    /// credentials.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let contents = fs::read_to_string(path)?;
        let mut config = Self::from_toml(&contents)?;
        config.apply_env();
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(app_key) = std::env::var(APP_KEY_VAR) {
            self.credentials.app_key = app_key;
        }
        if let Ok(token) = std::env::var(SESSION_TOKEN_VAR) {
            self.credentials.session_token = token;
        }
    }
}

//! read configuration from a file, the environment, or explicit values

use std::path::{Path, PathBuf};

use crate::errors::Error;
use crate::token::RefreshMode;

pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Config {
    /// Backend base URL including the `/api` prefix, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    /// When set, tokens are persisted to this JSON file instead of memory.
    #[serde(default)]
    pub session_file: Option<PathBuf>,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default)]
    pub refresh_mode: RefreshMode,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// # ENV Vars
    /// * `NER_API_URL` - backend base URL (required)
    /// * `NER_SESSION_FILE` - path of the token file
    /// * `NER_LOGIN_PATH` - login view path, defaults to `/login`
    /// * `NER_REFRESH_MODE` - `independent` or `coalesced`
    /// * `NER_TIMEOUT_SECS` - request timeout in seconds
    pub fn from_env() -> Result<Self, Error> {
        let base_url = std::env::var("NER_API_URL")
            .map_err(|_| Error::Config("Missing NER_API_URL env var".to_string()))?;
        let refresh_mode = match std::env::var("NER_REFRESH_MODE") {
            Ok(mode) => mode.parse()?,
            Err(_) => RefreshMode::default(),
        };
        let timeout_secs = match std::env::var("NER_TIMEOUT_SECS") {
            Ok(secs) => Some(secs.parse::<u64>().map_err(|e| {
                Error::Config(format!("Invalid NER_TIMEOUT_SECS '{}': {}", secs, e))
            })?),
            Err(_) => None,
        };
        let config = Config {
            base_url,
            session_file: std::env::var("NER_SESSION_FILE").ok().map(PathBuf::from),
            login_path: std::env::var("NER_LOGIN_PATH").unwrap_or_else(|_| default_login_path()),
            refresh_mode,
            timeout_secs,
            user_agent: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a config without validation; `ApiClient::new` validates the URL.
    pub fn from_values(
        base_url: impl Into<String>,
        session_file: Option<PathBuf>,
        refresh_mode: RefreshMode,
        timeout_secs: Option<u64>,
    ) -> Self {
        Config {
            base_url: base_url.into(),
            session_file,
            login_path: default_login_path(),
            refresh_mode,
            timeout_secs,
            user_agent: None,
        }
    }

    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("ner-console-client/{}", env!("CARGO_PKG_VERSION")))
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        reqwest::Url::parse(&self.base_url).map_err(|e| {
            Error::Config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        if !self.login_path.starts_with('/') {
            return Err(Error::Config(format!(
                "Login path '{}' must start with '/'",
                self.login_path
            )));
        }
        Ok(())
    }
}

use crate::error::{AppError, Result};
use crate::http::parse_base_url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR_PREFIX: &str = "debit-card-client";
const AUTH_KEY_ENV: &str = "DEBIT_CARD_AUTH_KEY";
pub const DEFAULT_BASE_URL: &str = "https://www.example.com/api/";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub auth_key: String,
    /// Send balance loads to `cards/{id}/update` instead of `cards/{id}/load`
    #[serde(default)]
    pub balance_via_update: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_key: String::new(),
            balance_via_update: false,
        }
    }
}

impl ApiConfig {
    pub fn new(auth_key: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.auth_key.is_empty() {
            return Err(AppError::Config(format!(
                "auth_key must be set in config file or {}",
                AUTH_KEY_ENV
            )));
        }
        parse_base_url(&self.base_url)?;
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file()?;
        let contents = match config_path.exists() {
            true => Some(fs::read_to_string(&config_path)?),
            false => None,
        };
        let env_key = std::env::var(AUTH_KEY_ENV).ok();

        Self::resolve(contents.as_deref(), env_key).map_err(|e| match e {
            AppError::Config(msg) if contents.is_none() => {
                AppError::Config(format!("{} (looked in {:?})", msg, config_path))
            }
            other => other,
        })
    }

    /// Combine the config file contents (if any) with the auth key from the
    /// environment. A non-empty env key overrides the file's key.
    fn resolve(file: Option<&str>, env_key: Option<String>) -> Result<Self> {
        let env_key = env_key.filter(|k| !k.is_empty());

        let mut config = match (file, &env_key) {
            (Some(contents), _) => Self::parse(contents)?,
            (None, Some(_)) => Config::default(),
            (None, None) => {
                return Err(AppError::Config(format!(
                    "Config file not found. Please create one or set {}.",
                    AUTH_KEY_ENV
                )));
            }
        };

        if let Some(key) = env_key {
            config.api.auth_key = key;
        }

        config.api.validate()?;
        Ok(config)
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))
    }

    fn xdg_dirs() -> xdg::BaseDirectories {
        xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        let xdg_dirs = Self::xdg_dirs();
        xdg_dirs
            .place_config_file("config.toml")
            .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))
    }
}

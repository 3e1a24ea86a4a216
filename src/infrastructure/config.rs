// src/infrastructure/config.rs
use crate::domain::{DomainError, SiteProfile};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const API_BASE_URL_ENV: &str = "ARTICLEVIEW_API_BASE_URL";
pub const SITE_BASE_URL_ENV: &str = "ARTICLEVIEW_SITE_BASE_URL";

/// TOML configuration of articleview
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_site_base_url")]
    pub base_url: String,
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_keywords")]
    pub keywords: String,
    #[serde(default = "default_image")]
    pub default_image: String,
}

// Default value functions
fn default_api_base_url() -> String { "https://dev.to/api".to_string() }
fn default_timeout_secs() -> u64 { 10 }
fn default_user_agent() -> String { format!("articleview/{}", env!("CARGO_PKG_VERSION")) }
fn default_site_base_url() -> String { "http://localhost:3000".to_string() }
fn default_site_name() -> String { "Deals Articles".to_string() }
fn default_keywords() -> String { "React, Web Development, SEO, Articles, Tech".to_string() }
fn default_image() -> String { "default-image-url".to_string() }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_site_base_url(),
            name: default_site_name(),
            keywords: default_keywords(),
            default_image: default_image(),
        }
    }
}

/// Values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_base_url: Option<String>,
    pub site_base_url: Option<String>,
}

impl Overrides {
    /// Read the base URL overrides from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            api_base_url: non_empty(API_BASE_URL_ENV),
            site_base_url: non_empty(SITE_BASE_URL_ENV),
        }
    }

    /// Fields set in `other` win
    pub fn or(self, other: Overrides) -> Self {
        Self {
            api_base_url: other.api_base_url.or(self.api_base_url),
            site_base_url: other.site_base_url.or(self.site_base_url),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/articleview/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("articleview").join("config.toml"))
    }

    /// Explicit file if given, else the default file if it exists, else built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    debug!(?path, "Using default config file");
                    Self::load(path)
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Apply overrides and normalize base URLs
    pub fn resolve(mut self, overrides: Overrides) -> Result<Self, DomainError> {
        if let Some(url) = overrides.api_base_url {
            self.api.base_url = url;
        }
        if let Some(url) = overrides.site_base_url {
            self.site.base_url = url;
        }

        self.api.base_url = normalize_base_url(&self.api.base_url, "api.base_url")?;
        self.site.base_url = normalize_base_url(&self.site.base_url, "site.base_url")?;
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn site_profile(&self) -> SiteProfile {
        SiteProfile {
            base_url: self.site.base_url.clone(),
            name: self.site.name.clone(),
            keywords: self.site.keywords.clone(),
            default_image: self.site.default_image.clone(),
        }
    }
}

fn normalize_base_url(value: &str, field: &str) -> Result<String, DomainError> {
    let trimmed = value.trim().trim_end_matches('/');
    url::Url::parse(trimmed)
        .map_err(|e| DomainError::Config(format!("{} '{}' is not a URL: {}", field, value, e)))?;
    Ok(trimmed.to_string())
}

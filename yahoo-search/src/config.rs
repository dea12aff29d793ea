//! Configuration loading for yahoo-search
//!
//! Configuration is loaded from:
//! 1. Environment variable YAHOO_SEARCH_CONFIG_PATH
//! 2. ~/.config/yahoo-search/config.toml
//! 3. Default values
//!
//! `YAHOO_SEARCH_REGION` and `YAHOO_SEARCH_TIMEOUT` override whatever the
//! file says.

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::error::YahooError;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP transport configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Endpoint configuration
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Largest accepted response body in bytes
    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,
}

/// Yahoo endpoint configuration
///
/// Every URL defaults to the regional Yahoo host; explicit values win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Regional subdomain, e.g. "sg" or "uk"
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<String>,
    /// Base that relative video links are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
}

// Default value functions
fn default_timeout() -> u64 {
    15
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36 OPR/102.0.0.0"
        .to_string()
}

fn default_max_response_size() -> usize {
    5 * 1024 * 1024
}

fn default_region() -> String {
    "sg".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            max_response_size: default_max_response_size(),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            search: None,
            news: None,
            videos: None,
            video_host: None,
            images: None,
            weather: None,
            autocomplete: None,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let mut config = match config_path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Self::from_toml(&content)?
            }
            Some(_) => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        if let Ok(region) = std::env::var("YAHOO_SEARCH_REGION") {
            config.endpoints.region = region;
        }

        if let Ok(timeout) = std::env::var("YAHOO_SEARCH_TIMEOUT") {
            config.http.timeout_seconds = timeout
                .parse()
                .with_context(|| format!("YAHOO_SEARCH_TIMEOUT is not a number: {timeout}"))?;
        }

        Ok(config)
    }

    /// Parse a configuration document
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("YAHOO_SEARCH_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home)
                .join(".config")
                .join("yahoo-search")
                .join("config.toml");
            return Some(path);
        }

        None
    }
}

/// Resolved endpoint URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub search: Url,
    pub news: Url,
    pub videos: Url,
    pub video_host: Url,
    pub images: Url,
    pub weather: Url,
    pub autocomplete: Url,
}

impl EndpointConfig {
    /// Resolve the configured endpoints into URLs
    pub fn resolve(&self) -> std::result::Result<Endpoints, YahooError> {
        let region = self.region.trim();
        if region.is_empty() || !region.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(YahooError::Config(format!("invalid region: {:?}", self.region)));
        }

        let pick = |explicit: &Option<String>, default: String| -> std::result::Result<Url, YahooError> {
            let raw = explicit.clone().unwrap_or(default);
            Url::parse(&raw).map_err(|e| YahooError::Config(format!("invalid URL {raw:?}: {e}")))
        };

        Ok(Endpoints {
            search: pick(&self.search, format!("https://{region}.search.yahoo.com/search"))?,
            news: pick(&self.news, format!("https://{region}.news.search.yahoo.com/search"))?,
            videos: pick(&self.videos, format!("https://{region}.video.search.yahoo.com/search"))?,
            video_host: pick(&self.video_host, format!("https://{region}.video.search.yahoo.com"))?,
            images: pick(&self.images, format!("https://{region}.image.search.yahoo.com/search"))?,
            weather: pick(&self.weather, format!("https://{region}.news.yahoo.com/weather/"))?,
            autocomplete: pick(&self.autocomplete, "https://ff.search.yahoo.com/gossip".to_string())?,
        })
    }
}

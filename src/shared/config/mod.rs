//! Application configuration module
//!
//! Provides the client-facing connection configuration and the URL rules
//! shared by the desktop client and its tests.

use thiserror::Error;
use url::Url;

/// Path of the socket endpoint on the server
pub const SOCKET_PATH: &str = "/ws";

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server URL, either `http(s)://host[:port]` or a full `ws(s)://` socket URL
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.server_url {
            Some(url) => socket_url(url).map(|_| ()),
            None => Ok(()),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url.map(|url| url.trim().to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Derive the WebSocket URL from a configured server URL.
///
/// `http://host:3001` becomes `ws://host:3001/ws`; `https` maps to `wss`.
/// URLs already using `ws`/`wss` keep their path, and `/ws` is used only when
/// they carry none. Query strings are kept, fragments dropped.
pub fn socket_url(server_url: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidUrl(server_url.to_string());
    let mut url = Url::parse(server_url.trim()).map_err(|_| invalid())?;

    let ws_scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        _ => return Err(invalid()),
    };
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid());
    }

    url.set_scheme(ws_scheme).map_err(|_| invalid())?;
    if url.path().is_empty() || url.path() == "/" {
        url.set_path(SOCKET_PATH);
    }
    url.set_fragment(None);

    Ok(url.into())
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("failed to read config file: {0}")]
    Io(String),
}

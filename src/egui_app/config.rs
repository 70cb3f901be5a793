use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::shared::config::{socket_url, AppConfig, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3001";

/// Environment variable overriding the configured server URL
const SERVER_URL_ENV: &str = "CLIENT_API_URL";

/// Contents of `client.toml`
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    server_url: Option<String>,
}

/// Desktop client configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Load the configuration from `client.toml` and the environment.
    ///
    /// Problems with either source are logged and the default server URL is
    /// used instead.
    pub fn load() -> Self {
        let file_contents = match Self::config_path() {
            Some(path) => read_config_file(&path).unwrap_or_else(|e| {
                tracing::warn!("[Client] {}", e);
                None
            }),
            None => None,
        };

        let env_url = std::env::var(SERVER_URL_ENV).ok();

        match Self::from_sources(file_contents.as_deref(), env_url) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("[Client] Ignoring invalid configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Build a configuration from raw `client.toml` contents and an optional
    /// environment override. The override wins when both are present.
    pub fn from_sources(file_contents: Option<&str>, env_url: Option<String>) -> Result<Self, ConfigError> {
        let file: ConfigFile = match file_contents {
            Some(contents) => toml::from_str(contents).map_err(|e| ConfigError::InvalidValue {
                name: "client.toml",
                value: e.to_string(),
            })?,
            None => ConfigFile::default(),
        };

        let server_url = env_url
            .filter(|url| !url.trim().is_empty())
            .or(file.server_url);

        let mut builder = AppConfig::builder();
        if let Some(url) = server_url {
            builder = builder.server_url(url);
        }

        Ok(Self { app: builder.build()? })
    }

    /// Location of `client.toml` in the platform config directory
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xftodo").join("client.toml"))
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// WebSocket URL derived from the server URL
    pub fn socket_url(&self) -> Result<String, ConfigError> {
        socket_url(self.server_url())
    }
}

/// Read `path`, treating a missing file as "no file"
fn read_config_file(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            tracing::info!("[Client] Using config file {}", path.display());
            Ok(Some(contents))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::Io(format!("{}: {}", path.display(), e))),
    }
}

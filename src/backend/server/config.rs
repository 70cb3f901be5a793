/**
 * Server Configuration
 *
 * This module loads server settings from environment variables, with
 * defaults suitable for local development.
 *
 * | variable            | default         |
 * |---------------------|-----------------|
 * | `PORT`              | `3001`          |
 * | `DATABASE_URL`      | unset (memory)  |
 * | `STATIC_DIR`        | `frontend/dist` |
 * | `BROADCAST_UPDATES` | `false`         |
 *
 * # Error Handling
 *
 * Invalid values are logged and replaced by their default. They never
 * prevent server startup.
 */

use std::path::PathBuf;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3001;

/// Default directory of the built web frontend
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// SQLite URL; `None` keeps todos in memory
    pub database_url: Option<String>,
    pub static_dir: PathBuf,
    /// Relay mutations to every connection instead of the sender only
    pub broadcast_updates: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            broadcast_updates: false,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("[Config] Invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let broadcast_updates = match lookup("BROADCAST_UPDATES") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!("[Config] Invalid BROADCAST_UPDATES {:?}, relaying disabled", raw);
                false
            }),
            None => defaults.broadcast_updates,
        };

        Self {
            port,
            database_url,
            static_dir,
            broadcast_updates,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

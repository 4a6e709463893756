//! Application configuration.
//!
//! Loaded from a TOML file, with `AUTH_*` environment variables (or a
//! `.env` file) taking precedence over the `[auth]` table.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable overriding [`AuthSettings::domain`].
pub const ENV_AUTH_DOMAIN: &str = "AUTH_DOMAIN";
/// Environment variable overriding [`AuthSettings::client_id`].
pub const ENV_AUTH_CLIENT_ID: &str = "AUTH_CLIENT_ID";
/// Environment variable overriding [`AuthSettings::redirect_uri`].
pub const ENV_AUTH_REDIRECT_URI: &str = "AUTH_REDIRECT_URI";

/// Log filter used when `RUST_LOG` is unset, for both the TUI log file and
/// the stderr output of the one-shot commands.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Brand shown in the navigation bar and footer.
    #[serde(default = "default_brand")]
    brand: String,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Identity provider settings.
    #[serde(default)]
    auth: AuthSettings,
}

/// Identity provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Base URL of the hosted identity provider.
    #[serde(default = "default_domain")]
    domain: String,

    /// OAuth client id registered with the provider.
    #[serde(default)]
    client_id: String,

    /// Where the provider sends the user after signing in.
    #[serde(default = "default_redirect_uri")]
    redirect_uri: String,

    /// UI ticks the provider reports `is_loading` for at startup.
    #[serde(default = "default_startup_ticks")]
    startup_ticks: u32,

    /// UI ticks a sign-in or sign-up request stays in flight.
    #[serde(default = "default_flow_ticks")]
    flow_ticks: u32,
}

fn default_brand() -> String {
    "Your App".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_gate.log")
}

fn default_domain() -> String {
    "https://auth.example.com".to_string()
}

fn default_redirect_uri() -> String {
    "http://localhost:3000".to_string()
}

fn default_startup_ticks() -> u32 {
    5
}

fn default_flow_ticks() -> u32 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            log_file: default_log_file(),
            auth: AuthSettings::default(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            client_id: String::new(),
            redirect_uri: default_redirect_uri(),
            startup_ticks: default_startup_ticks(),
            flow_ticks: default_flow_ticks(),
        }
    }
}

impl AuthSettings {
    /// Creates settings with explicit timings and default endpoints.
    pub fn with_ticks(startup_ticks: u32, flow_ticks: u32) -> Self {
        Self {
            startup_ticks,
            flow_ticks,
            ..Self::default()
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(brand = %config.brand, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise the defaults, then applies
    /// environment overrides.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = if path.as_ref().exists() {
            Self::from_file(path)?
        } else {
            info!("Config file not found, using defaults");
            Self::default()
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Applies `AUTH_*` overrides read through `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(domain) = lookup(ENV_AUTH_DOMAIN) {
            debug!(%domain, "Overriding auth domain from environment");
            self.auth.domain = domain;
        }
        if let Some(client_id) = lookup(ENV_AUTH_CLIENT_ID) {
            debug!("Overriding auth client id from environment");
            self.auth.client_id = client_id;
        }
        if let Some(redirect_uri) = lookup(ENV_AUTH_REDIRECT_URI) {
            debug!(%redirect_uri, "Overriding auth redirect uri from environment");
            self.auth.redirect_uri = redirect_uri;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

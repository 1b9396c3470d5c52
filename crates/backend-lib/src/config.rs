// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AppError;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Prefix for environment overrides, e.g. `PASSGATE__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "PASSGATE";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP listener
    pub server: ServerSettings,
    /// Password policy inputs
    pub policy: PolicySettings,
    /// Per-client request limits
    pub rate_limit: RateLimitSettings,
    /// Static asset directory
    pub static_files: StaticFileSettings,
    /// Default log level when `RUST_LOG` is unset
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PolicySettings {
    /// Line-delimited list of common passwords
    pub common_passwords_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
    /// Window length in seconds
    pub window_secs: u64,
    /// Requests allowed per client per window
    pub max_requests: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFileSettings {
    pub dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            policy: PolicySettings::default(),
            rate_limit: RateLimitSettings::default(),
            static_files: StaticFileSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            common_passwords_path: PathBuf::from("data/common-passwords.txt"),
        }
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            window_secs: 15 * 60, // 15 minutes
            max_requests: 100,
        }
    }
}

impl Default for StaticFileSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
        }
    }
}

impl RateLimitSettings {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

impl Settings {
    /// Load settings from the default config file (if present) and the environment
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load settings from `path` (if present) and the environment.
    ///
    /// Environment variables win over the file, and a bare `PORT` wins over both.
    /// The result is not validated: callers apply their own overrides first and
    /// then call [`Settings::validate`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let mut settings: Settings = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            settings.server.port = port
                .parse()
                .map_err(|_| AppError::InvalidInput(format!("PORT must be a number, got {port:?}")))?;
        }

        Ok(settings)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<(), AppError> {
        if self.server.port == 0 {
            return Err(AppError::InvalidInput("server.port must be non-zero".to_string()));
        }
        if self.rate_limit.window_secs == 0 {
            return Err(AppError::InvalidInput(
                "rate_limit.window_secs must be non-zero".to_string(),
            ));
        }
        if self.rate_limit.max_requests == 0 {
            return Err(AppError::InvalidInput(
                "rate_limit.max_requests must be non-zero".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(AppError::InvalidInput(format!(
                "log_level must be one of {LOG_LEVELS:?}, got {:?}",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|_| {
                AppError::InvalidInput(format!(
                    "invalid bind address {}:{}",
                    self.server.host, self.server.port
                ))
            })
    }
}

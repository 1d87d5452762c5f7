//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/sixdegrees/config.toml` (XDG) or platform config dir
//! 3. Project config: `.sixdegrees.toml`
//! 4. Environment variables: `SIXDEGREES_*`, nested keys split on `__`
//!
//! CLI flags are applied on top by the command handlers.
//!
//! # Example
//!
//! ```toml
//! [server]
//! port = 8080
//! cache_duration = "2h45m"
//!
//! [neo4j]
//! uri = "bolt://neo4j.internal:7687"
//! user = "reader"
//! query_timeout_secs = 30
//!
//! [api]
//! base_url = "http://api.ft.com"
//! ```

use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application name used in logs.
    pub app_name: String,
    /// System code reported by the health endpoint.
    pub system_code: String,
    pub server: ServerConfig,
    pub neo4j: Neo4jConfig,
    pub api: ApiConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// How long GET responses may be cached, e.g. `1h` or `2h45m`.
    pub cache_duration: String,
    /// Whether every request is logged through the trace layer.
    pub request_logging: bool,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

/// Neo4j connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neo4jConfig {
    /// Bolt URI, e.g. `bolt://localhost:7687`.
    pub uri: String,
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    /// Database name; the server default is used when unset.
    #[serde(default)]
    pub database: Option<String>,
    pub max_connections: usize,
    pub fetch_size: usize,
    /// Upper bound on a single statement and on each row fetch.
    pub query_timeout_secs: u64,
}

impl Neo4jConfig {
    /// Statement timeout for the graph engine.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

/// Settings for the public entity URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base of every `id` and `apiUrl` handed out, without trailing slash.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "public-six-degrees".to_string(),
            system_code: "public-six-degrees-api".to_string(),
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                cache_duration: "1h".to_string(),
                request_logging: true,
                log_level: "info".to_string(),
            },
            neo4j: Neo4jConfig {
                uri: "bolt://localhost:7687".to_string(),
                user: "neo4j".to_string(),
                password: None,
                database: None,
                max_connections: 16,
                fetch_size: 500,
                query_timeout_secs: 60,
            },
            api: ApiConfig {
                base_url: "http://api.ft.com".to_string(),
            },
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::user_config_path(), Path::new(".sixdegrees.toml"))
    }

    /// Load config from explicit user and project files. Missing files are skipped.
    pub fn load_from(user_config: &Path, project_config: &Path) -> Result<Self, ConfigError> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(user_config))
            .merge(Toml::file(project_config))
            .merge(Env::prefixed("SIXDEGREES_").split("__"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// The `Cache-Control` value sent with successful responses.
    pub fn cache_control_header(&self) -> Result<String, ConfigError> {
        let duration = parse_duration(&self.server.cache_duration).ok_or_else(|| {
            ConfigError::from(figment::Error::from(format!(
                "invalid server.cache_duration '{}'",
                self.server.cache_duration
            )))
        })?;
        Ok(format!("max-age={}, public", duration.as_secs()))
    }

    /// User config path: ~/.config/sixdegrees/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("sixdegrees").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("sixdegrees").join("config.toml"))
            .unwrap_or_default()
    }
}

/// Parses a duration written as a sequence of `<number><unit>` pairs
/// (`h`, `m`, `s`, `ms`), e.g. `1h`, `2h45m`, `90s`.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if input == "0" {
        return Some(Duration::ZERO);
    }

    let mut total = Duration::ZERO;
    let mut rest = input;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits == 0 {
            return None;
        }
        let value: u64 = rest[..digits].parse().ok()?;
        rest = &rest[digits..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let part = match &rest[..unit_len] {
            "h" => Duration::from_secs(value.checked_mul(3600)?),
            "m" => Duration::from_secs(value.checked_mul(60)?),
            "s" => Duration::from_secs(value),
            "ms" => Duration::from_millis(value),
            _ => return None,
        };
        total = total.checked_add(part)?;
        rest = &rest[unit_len..];
    }
    Some(total)
}

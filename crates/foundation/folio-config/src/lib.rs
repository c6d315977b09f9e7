//! Folio runtime configuration
//!
//! Resolution order, later wins:
//!
//! 1. built-in defaults
//! 2. a YAML file (`--config`, or `<config dir>/folio/config.yaml` when present)
//! 3. environment: `FOLIO_HOST`, `FOLIO_PORT`, `FOLIO_CONTENT`, `FOLIO_LOG`
//! 4. command-line flags (applied by the binary)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_HOST: &str = "FOLIO_HOST";
pub const ENV_PORT: &str = "FOLIO_PORT";
pub const ENV_CONTENT: &str = "FOLIO_CONTENT";
pub const ENV_LOG: &str = "FOLIO_LOG";

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "folio_web=info,folio_core=info,tower_http=info";

/// Result type for folio-config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid port '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub server: ServerConfig,
    /// YAML site content replacing the built-in portfolio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl SiteConfig {
    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.yaml"))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a config file. Relative content paths resolve against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml_str(&yaml)?;

        if let (Some(content), Some(base)) = (config.content.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = base.join(&*content);
            }
        }

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Resolve the file layer: an explicit path must exist, the default may not
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Apply environment overrides from the process environment
    pub fn with_env(self) -> Result<Self> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides from an arbitrary lookup
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(content) = lookup(ENV_CONTENT) {
            self.content = Some(PathBuf::from(content));
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = Some(filter);
        }
        Ok(self)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

use crate::record::FormatMode;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/trawl/trawl.toml";
pub const CONFIG_ENV_VAR: &str = "TRAWL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TrawlConfig {
    /// How many rotated files the log rotation keeps.
    pub log_retention_days: u32,

    /// Public hostname the application tier is served under, e.g. "chat.example.com".
    pub external_host: Option<String>,

    pub app_log_path: PathBuf,

    pub gateway_log_path: PathBuf,
}

impl Default for TrawlConfig {
    fn default() -> Self {
        Self {
            log_retention_days: 14,
            external_host: None,
            app_log_path: PathBuf::from("/var/log/trawl/server.log"),
            gateway_log_path: PathBuf::from("/var/log/nginx/access.log"),
        }
    }
}

impl TrawlConfig {
    /// Load configuration.
    ///
    /// An explicit path (argument or `$TRAWL_CONFIG`) must exist. The default
    /// path is optional; when it is missing the built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);

        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(&path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &contents)
    }

    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn log_path(&self, mode: FormatMode) -> &Path {
        match mode {
            FormatMode::ApplicationLog => &self.app_log_path,
            FormatMode::GatewayLog => &self.gateway_log_path,
        }
    }

    pub fn host_decorator(&self) -> SuffixDecorator {
        SuffixDecorator::new(self.external_host.clone())
    }
}

/// Turns a record's hostname into the host shown in its URL.
pub trait HostDecorator {
    fn display_host(&self, hostname: &str, mode: FormatMode) -> String;
}

/// Appends the external host to application-tier subdomain labels.
///
/// Gateway hostnames are already fully qualified and pass through.
#[derive(Debug, Clone, Default)]
pub struct SuffixDecorator {
    external_host: Option<String>,
}

impl SuffixDecorator {
    pub fn new(external_host: Option<String>) -> Self {
        Self { external_host }
    }
}

impl HostDecorator for SuffixDecorator {
    fn display_host(&self, hostname: &str, mode: FormatMode) -> String {
        if mode.is_gateway() {
            return hostname.to_string();
        }
        match (&self.external_host, hostname) {
            (Some(external), "") => external.clone(),
            (Some(external), label) => format!("{label}.{external}"),
            (None, "") => "localhost".to_string(),
            (None, label) => label.to_string(),
        }
    }
}

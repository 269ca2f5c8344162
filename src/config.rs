use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the persisted configuration, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Persisted client state: where the service lives plus the current token
/// pair. Tokens are opaque strings and are never inspected client-side; an
/// empty `access_token` means logged out.
///
/// `host` carries the scheme (e.g. `http://127.0.0.1`) and no trailing slash;
/// the base URL is the literal `host:port` concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub access_token: String,
    pub refresh_token: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "http://127.0.0.1".to_string(),
            port: 5000,
            access_token: String::new(),
            refresh_token: String::new(),
        }
    }
}

impl ClientConfig {
    /// Base URL all API paths are appended to.
    pub fn base_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Owns the on-disk representation of a [`ClientConfig`].
///
/// Saving is always an explicit call by whichever component mutated the
/// config; there is no flush-on-change.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted config. A missing file is not an error: the default
    /// record is written out and returned, so a second load observes exactly
    /// what the first one created.
    pub fn load(&self) -> Result<ClientConfig, CliError> {
        if !self.path.exists() {
            let config = ClientConfig::default();
            self.save(&config)?;
            tracing::info!(path = %self.path.display(), "created default configuration");
            return Ok(config);
        }
        let text = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Fail-soft variant used by the interactive entrypoint: an unreadable or
    /// corrupt file degrades to the default record with a logged warning
    /// instead of aborting the session.
    pub fn load_or_default(&self) -> ClientConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to load configuration, falling back to defaults"
                );
                ClientConfig::default()
            }
        }
    }

    /// Serialize the full record (pretty-printed, human-editable) and
    /// overwrite the backing file.
    pub fn save(&self, config: &ClientConfig) -> Result<(), CliError> {
        let text = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

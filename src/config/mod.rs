//! Configuration management for the MobSF CLI
//!
//! Settings resolve in the order flag > environment variable > config file >
//! built-in default. clap covers the first two; this module covers the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Error, Result};

/// Config file settings. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// MobSF server base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    /// MobSF REST API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the default config file path (`~/.mobsf/config.yaml`)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".mobsf").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, treating a missing file as empty
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| Error::file(&path, e))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration, to the default path unless overridden
    pub fn save_at(&self, path: Option<&str>) -> Result<PathBuf> {
        let path = Self::resolve_path(path)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::file(parent, e))?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents).map_err(|e| Error::file(path, e))?;

        // The file holds the API key
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Configured timeout as a `Duration`
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Where a resolved setting came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Command-line flag or environment variable
    CommandLine,
    /// Config file
    File,
    /// Built-in default
    Default,
}

/// Settings after merging command-line values over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Server URL, `None` meaning the client default
    pub server: Option<String>,
    /// API key, `None` when not configured anywhere
    pub api_key: Option<String>,
    /// Where the API key came from
    pub api_key_source: Source,
    /// Per-request timeout
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Merge command-line values (flag or env, already combined by clap)
    /// over the config file. Blank strings count as unset.
    pub fn resolve(
        server: Option<&str>,
        api_key: Option<&str>,
        timeout_secs: Option<u64>,
        config: &Config,
    ) -> Self {
        let server = non_blank(server).or_else(|| non_blank(config.server.as_deref()));

        let (api_key, api_key_source) = match non_blank(api_key) {
            Some(key) => (Some(key), Source::CommandLine),
            None => match non_blank(config.api_key.as_deref()) {
                Some(key) => (Some(key), Source::File),
                None => (None, Source::Default),
            },
        };

        let timeout = timeout_secs
            .map(Duration::from_secs)
            .or_else(|| config.timeout());

        Self {
            server,
            api_key,
            api_key_source,
            timeout,
        }
    }

    /// The API key, or `ConfigError::MissingApiKey`
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingApiKey.into())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

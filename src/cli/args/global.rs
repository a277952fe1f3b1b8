//! Global CLI options shared across all commands
//!
//! Consolidates the top-level flags into one struct so handler signatures
//! stay small.

use log::{LevelFilter, warn};

use crate::cli::Cli;
use crate::config::{Config, Settings};
use crate::error::{ConfigError, Error, Result};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// Flag > environment variable > config file > default. This struct captures
/// the flag/env layer; [`GlobalOptions::settings`] merges in the config file.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// MobSF server override
    pub server: Option<String>,

    /// API key from `--apikey` or `MOBSF_API_KEY`
    pub api_key: Option<String>,

    /// Number of `-v` flags
    pub verbose: u8,

    /// Per-request timeout in seconds
    pub timeout: Option<u64>,

    /// Custom config file path (defaults to ~/.mobsf/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            server: cli.server.clone(),
            api_key: cli.api_key.clone(),
            verbose: cli.verbose,
            timeout: cli.timeout,
            config: cli.config.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Log level for the number of `-v` flags: warnings only, then info,
    /// then debug.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Load the config file and merge these options over it.
    ///
    /// A malformed config file is only an error when no API key came from
    /// the flag or environment; otherwise it is skipped with a warning.
    pub fn settings(&self) -> Result<Settings> {
        let config = match Config::load_at(self.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::ParseError(e))) if self.has_api_key() => {
                warn!("Ignoring config file: {}", e);
                Config::default()
            }
            Err(e) => return Err(e),
        };
        Ok(Settings::resolve(
            self.server.as_deref(),
            self.api_key.as_deref(),
            self.timeout,
            &config,
        ))
    }
}

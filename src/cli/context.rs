//! Command execution context
//!
//! Resolves configuration and builds the API client for commands that talk
//! to the server.

use log::debug;

use crate::cli::GlobalOptions;
use crate::client::{MobsfApi, MobsfClient};
use crate::error::Result;

/// Context for command execution containing the configured client.
pub struct CommandContext {
    /// API client bound to the resolved server and API key
    pub client: MobsfClient,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// This handles:
    /// - Loading the config file from path (or default location)
    /// - Merging flag and environment values over it
    /// - Validating that an API key is present
    /// - Creating the API client
    ///
    /// # Errors
    /// Returns `ConfigError::MissingApiKey` before any network activity when no
    /// API key resolves, and a config error if the config file is malformed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let settings = opts.settings()?;
        let api_key = settings.require_api_key()?;

        let client =
            MobsfClient::with_timeout(api_key, settings.server.as_deref(), settings.timeout)?;
        debug!("Using MobSF server {}", client.server());

        Ok(Self { client })
    }
}

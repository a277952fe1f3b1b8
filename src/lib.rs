//! Command-line client and thin library for the MobSF REST API
//!
//! [`client::MobsfClient`] wraps the `/api/v1` endpoints. The `cli` module
//! holds the argument definitions and command handlers behind the `mobsf`
//! binary.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use client::{MobsfApi, MobsfClient};
pub use error::{ApiError, ConfigError, Error, Result};

//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::PaginationParams;
use crate::client::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Pagination arguments for the scans listing.
#[derive(Args, Debug, Clone)]
pub struct PaginationArgs {
    /// Page number (1-indexed)
    #[arg(long, short = 'p', default_value_t = DEFAULT_PAGE)]
    pub page: u32,

    /// Scans per page
    #[arg(long = "pagesize", short = 's', default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

impl Default for PaginationArgs {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationArgs {
    /// Convert CLI args to API pagination params.
    pub fn to_params(&self) -> PaginationParams {
        PaginationParams::new()
            .page(self.page)
            .page_size(self.page_size)
    }
}

//! Pagination parameters for the recent-scans listing

/// Page requested when none is given.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Pagination parameters for `/api/v1/scans`.
///
/// Pages are 1-indexed on the MobSF side.
///
/// # Example
/// ```
/// use mobsf_cli::client::PaginationParams;
///
/// let params = PaginationParams::new().page(2).page_size(25);
/// assert_eq!(params.page, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    pub page: u32,
    /// Number of scans per page
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    /// Create new pagination params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size (scans per page).
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Convert to query string parameters using MobSF parameter names.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_default() {
        let query = PaginationParams::new().to_query_params();
        assert_eq!(
            query,
            vec![("page", "1".to_string()), ("page_size", "100".to_string())]
        );
    }

    #[test]
    fn test_pagination_params_builder() {
        let params = PaginationParams::new().page_size(10).page(3);

        assert_eq!(params.page, 3);
        assert_eq!(params.page_size, 10);
        assert!(params.to_query_params().contains(&("page", "3".to_string())));
    }
}

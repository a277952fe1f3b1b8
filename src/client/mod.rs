//! MobSF REST API client

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod mobsf;
pub mod models;
pub mod pagination;

#[cfg(test)]
pub use mock::MockMobsfClient;
pub use mobsf::{DEFAULT_PDF_NAME, DEFAULT_SERVER, MobsfClient};
pub use models::{ScanSummary, ScanType, UploadedFile};
pub use pagination::PaginationParams;

/// MobSF REST API operations
///
/// Every method issues exactly one request. Responses are returned as
/// untyped JSON since the server owns their shape.
#[async_trait]
pub trait MobsfApi: Send + Sync {
    /// Base URL of the server, without trailing slash
    fn server(&self) -> &str;

    /// Upload an app binary (`/api/v1/upload`)
    async fn upload(&self, file: &Path) -> Result<Value>;

    /// Scan a previously uploaded file (`/api/v1/scan`)
    async fn scan(
        &self,
        scan_type: ScanType,
        file_name: &str,
        hash: &str,
        rescan: bool,
    ) -> Result<Value>;

    /// List recent scans (`/api/v1/scans`)
    async fn scans(&self, pagination: &PaginationParams) -> Result<Value>;

    /// Fetch the JSON report of a scan (`/api/v1/report_json`)
    async fn report_json(&self, hash: &str) -> Result<Value>;

    /// Download the PDF report of a scan (`/api/v1/download_pdf`).
    ///
    /// Writes to `output`, or [`DEFAULT_PDF_NAME`] when not given, and
    /// returns the path written.
    async fn report_pdf(&self, hash: &str, output: Option<&Path>) -> Result<PathBuf>;

    /// View a decompiled source file of a scan (`/api/v1/view_source`)
    async fn view_source(&self, scan_type: ScanType, file: &str, hash: &str) -> Result<Value>;

    /// Delete a scan and its results (`/api/v1/delete_scan`)
    async fn delete_scan(&self, hash: &str) -> Result<Value>;
}

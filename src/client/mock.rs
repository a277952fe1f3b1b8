//! Mock MobSF API client for testing
//!
//! Provides a mock implementation of [`MobsfApi`] for unit testing command
//! handlers without making real API calls.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{DEFAULT_PDF_NAME, MobsfApi, PaginationParams, ScanType};
use crate::error::{ApiError, Result};

/// A request recorded by the mock, for test assertions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedRequest {
    Upload {
        file: PathBuf,
    },
    Scan {
        scan_type: ScanType,
        file_name: String,
        hash: String,
        rescan: bool,
    },
    Scans {
        pagination: PaginationParams,
    },
    ReportJson {
        hash: String,
    },
    ReportPdf {
        hash: String,
        output: Option<PathBuf>,
    },
    ViewSource {
        scan_type: ScanType,
        file: String,
        hash: String,
    },
    DeleteScan {
        hash: String,
    },
}

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockMobsfClient::new()
///     .with_response("scan", json!({"status": "ok"}))
///     .await;
///
/// let result = mock.scan(ScanType::Apk, "app.apk", "abc123", false).await?;
/// assert_eq!(result["status"], "ok");
/// ```
pub struct MockMobsfClient {
    /// Responses keyed by endpoint name; unset endpoints answer `{}`
    responses: Arc<Mutex<Vec<(&'static str, Value)>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockMobsfClient {
    fn default() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockMobsfClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests to `endpoint` with `response`.
    pub async fn with_response(self, endpoint: &'static str, response: Value) -> Self {
        self.responses.lock().await.push((endpoint, response));
        self
    }

    /// Fail the next request with `error`.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// All requests made so far, in order.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn respond(&self, endpoint: &'static str, request: CapturedRequest) -> Result<Value> {
        self.captured_requests.lock().await.push(request);

        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }

        let responses = self.responses.lock().await;
        Ok(responses
            .iter()
            .rev()
            .find(|(name, _)| *name == endpoint)
            .map(|(_, value)| value.clone())
            .unwrap_or_else(|| Value::Object(Default::default())))
    }
}

#[async_trait]
impl MobsfApi for MockMobsfClient {
    fn server(&self) -> &str {
        "http://mock.mobsf"
    }

    async fn upload(&self, file: &Path) -> Result<Value> {
        self.respond(
            "upload",
            CapturedRequest::Upload {
                file: file.to_path_buf(),
            },
        )
        .await
    }

    async fn scan(
        &self,
        scan_type: ScanType,
        file_name: &str,
        hash: &str,
        rescan: bool,
    ) -> Result<Value> {
        self.respond(
            "scan",
            CapturedRequest::Scan {
                scan_type,
                file_name: file_name.to_string(),
                hash: hash.to_string(),
                rescan,
            },
        )
        .await
    }

    async fn scans(&self, pagination: &PaginationParams) -> Result<Value> {
        self.respond(
            "scans",
            CapturedRequest::Scans {
                pagination: *pagination,
            },
        )
        .await
    }

    async fn report_json(&self, hash: &str) -> Result<Value> {
        self.respond(
            "report_json",
            CapturedRequest::ReportJson {
                hash: hash.to_string(),
            },
        )
        .await
    }

    async fn report_pdf(&self, hash: &str, output: Option<&Path>) -> Result<PathBuf> {
        self.respond(
            "download_pdf",
            CapturedRequest::ReportPdf {
                hash: hash.to_string(),
                output: output.map(Path::to_path_buf),
            },
        )
        .await?;

        Ok(output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_NAME)))
    }

    async fn view_source(&self, scan_type: ScanType, file: &str, hash: &str) -> Result<Value> {
        self.respond(
            "view_source",
            CapturedRequest::ViewSource {
                scan_type,
                file: file.to_string(),
                hash: hash.to_string(),
            },
        )
        .await
    }

    async fn delete_scan(&self, hash: &str) -> Result<Value> {
        self.respond(
            "delete_scan",
            CapturedRequest::DeleteScan {
                hash: hash.to_string(),
            },
        )
        .await
    }
}

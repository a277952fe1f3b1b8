//! MobSF API client implementation

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use log::{debug, info};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::{MobsfApi, PaginationParams, ScanType};
use crate::error::{ApiError, ConfigError, Error, Result};

/// Server used when none is configured
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// File the PDF report is written to when no path is given
pub const DEFAULT_PDF_NAME: &str = "report.pdf";

/// Largest slice written to disk per call while streaming a PDF report
const PDF_CHUNK_SIZE: usize = 1024;

/// Content type of the uploaded file part
const UPLOAD_MIME_TYPE: &str = "application/octet-stream";

/// Longest server body quoted back in an error message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// MobSF API client
///
/// Holds the server base URL and API key; both are fixed at construction.
pub struct MobsfClient {
    http: HttpClient,
    server: String,
    api_key: String,
}

impl MobsfClient {
    /// Create a new client using the transport's default timeout behavior.
    ///
    /// An empty `server` falls back to [`DEFAULT_SERVER`]. Trailing slashes
    /// are stripped.
    pub fn new(api_key: impl Into<String>, server: Option<&str>) -> Result<Self> {
        Self::with_timeout(api_key, server, None)
    }

    /// Create a new client with an overall per-request timeout.
    pub fn with_timeout(
        api_key: impl Into<String>,
        server: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }

        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            server: normalize_server(server),
            api_key,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/api/v1/{}", self.server, endpoint)
    }

    fn post(&self, endpoint: &str) -> RequestBuilder {
        let url = self.url(endpoint);
        debug!("POST {}", url);
        self.http
            .post(url)
            .header(AUTHORIZATION, self.api_key.as_str())
    }

    /// POST url-encoded form fields and decode the JSON answer
    async fn post_form(&self, endpoint: &str, fields: &[(&str, &str)]) -> Result<Value> {
        let response = self
            .post(endpoint)
            .form(fields)
            .send()
            .await
            .map_err(ApiError::from)?;

        decode_json(response).await
    }
}

/// Multipart part carrying an uploaded app binary
fn file_part(contents: Vec<u8>, file_name: String) -> Result<Part> {
    Part::bytes(contents)
        .file_name(file_name)
        .mime_str(UPLOAD_MIME_TYPE)
        .map_err(|e| Error::Other(format!("Invalid upload content type: {}", e)))
}

/// Strip trailing slashes, falling back to the default server when empty.
fn normalize_server(server: Option<&str>) -> String {
    server
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SERVER)
        .to_string()
}

/// Turn a non-2xx response into `ApiError::Http`, passing 2xx through.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!("HTTP {} body: {}", status, snippet(&body));

    Err(ApiError::Http {
        status: status.as_u16(),
        message: error_message(status, &body),
    }
    .into())
}

/// Decode a 2xx response body as JSON.
async fn decode_json(response: Response) -> Result<Value> {
    let response = check_status(response).await?;
    let body = response.bytes().await.map_err(ApiError::from)?;

    serde_json::from_slice(&body).map_err(|e| {
        ApiError::InvalidResponse(format!(
            "Failed to parse response as JSON: {}. Body was: {}",
            e,
            snippet(&String::from_utf8_lossy(&body))
        ))
        .into()
    })
}

/// Pick the most useful description of a failed request.
///
/// MobSF reports API errors as `{"error": "..."}`; anything else (proxy or
/// framework error pages) is quoted in shortened form.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = map.get("error") {
            return message.clone();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string()
    } else {
        snippet(trimmed)
    }
}

fn snippet(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body.to_string()
    } else {
        let head: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", head)
    }
}

#[async_trait]
impl MobsfApi for MobsfClient {
    fn server(&self) -> &str {
        &self.server
    }

    async fn upload(&self, file: &Path) -> Result<Value> {
        debug!("Uploading {} to {}", file.display(), self.server);

        let contents = tokio::fs::read(file)
            .await
            .map_err(|e| Error::file(file, e))?;
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());

        let form = Form::new().part("file", file_part(contents, file_name)?);

        let response = self
            .post("upload")
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from)?;

        decode_json(response).await
    }

    async fn scan(
        &self,
        scan_type: ScanType,
        file_name: &str,
        hash: &str,
        rescan: bool,
    ) -> Result<Value> {
        debug!(
            "Requesting {} to scan {} ({}, {})",
            self.server, hash, file_name, scan_type
        );

        let re_scan = if rescan { "1" } else { "0" };
        self.post_form(
            "scan",
            &[
                ("scan_type", scan_type.as_str()),
                ("file_name", file_name),
                ("hash", hash),
                ("re_scan", re_scan),
            ],
        )
        .await
    }

    async fn scans(&self, pagination: &PaginationParams) -> Result<Value> {
        let url = self.url("scans");
        debug!("GET {} (page {})", url, pagination.page);

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .query(&pagination.to_query_params())
            .send()
            .await
            .map_err(ApiError::from)?;

        decode_json(response).await
    }

    async fn report_json(&self, hash: &str) -> Result<Value> {
        debug!("Requesting JSON report for scan {}", hash);
        self.post_form("report_json", &[("hash", hash)]).await
    }

    async fn report_pdf(&self, hash: &str, output: Option<&Path>) -> Result<PathBuf> {
        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_NAME));

        debug!("Requesting PDF report for scan {}", hash);
        let response = self
            .post("download_pdf")
            .form(&[("hash", hash)])
            .send()
            .await
            .map_err(ApiError::from)?;
        let response = check_status(response).await?;

        debug!("Writing PDF report to {}", path.display());
        let mut file = File::create(&path)
            .await
            .map_err(|e| Error::file(&path, e))?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(ApiError::from)?;
            for piece in chunk.chunks(PDF_CHUNK_SIZE) {
                file.write_all(piece)
                    .await
                    .map_err(|e| Error::file(&path, e))?;
            }
        }
        file.flush().await.map_err(|e| Error::file(&path, e))?;

        info!("Report saved as {}", path.display());
        Ok(path)
    }

    async fn view_source(&self, scan_type: ScanType, file: &str, hash: &str) -> Result<Value> {
        debug!(
            "Requesting source file {} for {} ({})",
            file, hash, scan_type
        );
        self.post_form(
            "view_source",
            &[("type", scan_type.as_str()), ("hash", hash), ("file", file)],
        )
        .await
    }

    async fn delete_scan(&self, hash: &str) -> Result<Value> {
        debug!("Requesting {} to delete scan {}", self.server, hash);
        self.post_form("delete_scan", &[("hash", hash)]).await
    }
}

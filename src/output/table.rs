//! Table output formatting

use serde::Serialize;
use serde_json::Value;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::{Formattable, json};
use crate::cli::OutputFormat;
use crate::client::ScanSummary;
use crate::error::Result;

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Row of the `scans` table
#[derive(Debug, Tabled, Serialize)]
pub struct ScanRow {
    #[tabled(rename = "HASH")]
    pub hash: String,
    #[tabled(rename = "FILE")]
    pub file_name: String,
    #[tabled(rename = "TYPE")]
    pub scan_type: String,
    #[tabled(rename = "APP")]
    pub app_name: String,
    #[tabled(rename = "PACKAGE")]
    pub package_name: String,
    #[tabled(rename = "VERSION")]
    pub version: String,
    #[tabled(rename = "TIMESTAMP")]
    pub timestamp: String,
}

impl From<ScanSummary> for ScanRow {
    fn from(scan: ScanSummary) -> Self {
        let cell = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
        Self {
            hash: cell(scan.hash),
            file_name: cell(scan.file_name),
            scan_type: cell(scan.scan_type),
            app_name: cell(scan.app_name),
            package_name: cell(scan.package_name),
            version: cell(scan.version_name),
            timestamp: cell(scan.timestamp),
        }
    }
}

/// Rows for the `content` array of a `/api/v1/scans` response.
///
/// A response without `content` yields no rows.
pub fn scan_rows(response: &Value) -> Result<Vec<ScanRow>> {
    let Some(content) = response.get("content") else {
        return Ok(Vec::new());
    };

    let scans: Vec<ScanSummary> = serde_json::from_value(content.clone())?;
    Ok(scans.into_iter().map(ScanRow::from).collect())
}

/// A `/api/v1/scans` response, printable as a table of scans
pub struct ScanListing(pub Value);

impl Formattable for ScanListing {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => json::format_json(&self.0),
            OutputFormat::Table => Ok(format_table(&scan_rows(&self.0)?)),
        }
    }
}

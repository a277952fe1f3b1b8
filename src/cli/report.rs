//! Report command implementations

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde_json::Value;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::MobsfApi;
use crate::error::Result;
use crate::output;
use crate::output::json::write_json_file;
use crate::output::progress::with_spinner;

/// Where a JSON report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    /// Print to stdout
    Stdout,
    /// Write to `report_<hash>.json`
    DefaultFile,
    /// Write to the given path
    File(PathBuf),
}

impl ReportTarget {
    /// Map `--output` as parsed by clap: absent, present without value, or
    /// present with a path.
    pub fn from_flag(output: Option<Option<PathBuf>>) -> Self {
        match output {
            None => ReportTarget::Stdout,
            Some(None) => ReportTarget::DefaultFile,
            Some(Some(path)) => ReportTarget::File(path),
        }
    }

    /// Destination file for a scan, `None` for stdout
    pub fn path_for(&self, hash: &str) -> Option<PathBuf> {
        match self {
            ReportTarget::Stdout => None,
            ReportTarget::DefaultFile => Some(default_json_path(hash)),
            ReportTarget::File(path) => Some(path.clone()),
        }
    }
}

/// Default JSON report file name for a scan hash
pub fn default_json_path(hash: &str) -> PathBuf {
    PathBuf::from(format!("report_{}.json", hash))
}

/// Run the report json command
pub async fn run_json(opts: &GlobalOptions, hash: &str, target: ReportTarget) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let report = ctx.client.report_json(hash).await?;

    match write_json_report(&report, hash, &target)? {
        Some(path) => print_written(&path),
        None => output::print(&report, OutputFormat::Json)?,
    }

    Ok(())
}

/// Write `report` to the file `target` names, returning the path written.
///
/// Returns `None` without writing anything when `target` is stdout.
pub fn write_json_report(report: &Value, hash: &str, target: &ReportTarget) -> Result<Option<PathBuf>> {
    let Some(path) = target.path_for(hash) else {
        return Ok(None);
    };

    write_json_file(report, &path)?;
    Ok(Some(path))
}

/// Run the report pdf command
pub async fn run_pdf(opts: &GlobalOptions, hash: &str, output: Option<&Path>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let path = report_pdf(&ctx.client, hash, output).await?;
    print_written(&path);
    Ok(())
}

/// Download the PDF report of a scan
pub async fn report_pdf<A: MobsfApi + ?Sized>(
    client: &A,
    hash: &str,
    output: Option<&Path>,
) -> Result<PathBuf> {
    with_spinner(
        "Downloading PDF report...",
        client.report_pdf(hash, output),
    )
    .await
}

fn print_written(path: &Path) {
    println!("Wrote report to {}", path.display().to_string().cyan());
}

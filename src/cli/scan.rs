//! Scan command implementations: scan, scans, source

use serde_json::Value;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, PaginationArgs, ScanTargetArgs};
use crate::client::{MobsfApi, ScanType};
use crate::error::Result;
use crate::output;
use crate::output::progress::with_spinner;
use crate::output::table::ScanListing;

/// Run the scan command
pub async fn run_scan(opts: &GlobalOptions, target: &ScanTargetArgs, rescan: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let result = scan(&ctx.client, target, rescan).await?;
    output::print(&result, OutputFormat::Json)
}

/// Scan an uploaded file
pub async fn scan<A: MobsfApi + ?Sized>(
    client: &A,
    target: &ScanTargetArgs,
    rescan: bool,
) -> Result<Value> {
    let scan_type = ScanType::from(target.scan_type);
    with_spinner(
        &format!("Scanning {}...", target.file_name),
        client.scan(scan_type, &target.file_name, &target.hash, rescan),
    )
    .await
}

/// Run the scans command
pub async fn run_scans(
    opts: &GlobalOptions,
    pagination: &PaginationArgs,
    format: OutputFormat,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let listing = scans(&ctx.client, pagination).await?;
    output::print(&listing, format)
}

/// Fetch one page of recent scans
pub async fn scans<A: MobsfApi + ?Sized>(
    client: &A,
    pagination: &PaginationArgs,
) -> Result<ScanListing> {
    let response = client.scans(&pagination.to_params()).await?;
    Ok(ScanListing(response))
}

/// Run the source command
pub async fn run_source(opts: &GlobalOptions, target: &ScanTargetArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let result = view_source(&ctx.client, target).await?;
    output::print(&result, OutputFormat::Json)
}

/// Fetch a decompiled source file of a scan
pub async fn view_source<A: MobsfApi + ?Sized>(
    client: &A,
    target: &ScanTargetArgs,
) -> Result<Value> {
    client
        .view_source(target.scan_type.into(), &target.file_name, &target.hash)
        .await
}

//! Upload command implementation

use std::path::Path;

use log::{info, warn};
use serde_json::{Value, json};

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::{MobsfApi, UploadedFile};
use crate::error::Result;
use crate::output;
use crate::output::progress::with_spinner;

/// Run the upload command
pub async fn run(opts: &GlobalOptions, file: &Path, noscan: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let result = upload(&ctx.client, file, noscan).await?;
    output::print(&result, OutputFormat::Json)
}

/// Upload `file` and, unless `noscan`, scan it right away.
///
/// Returns the upload response alone with `noscan`, otherwise
/// `{"upload": ..., "scan": ...}`. A format the scan endpoint does not
/// accept skips the scan and returns the upload response. When the scan
/// fails, the stored file's hash is logged before the error is returned.
pub async fn upload<A: MobsfApi + ?Sized>(client: &A, file: &Path, noscan: bool) -> Result<Value> {
    let uploaded = with_spinner(
        &format!("Uploading {}...", file.display()),
        client.upload(file),
    )
    .await?;

    if noscan {
        return Ok(uploaded);
    }

    let target = UploadedFile::from_response(&uploaded)?;
    let Some(scan_type) = target.known_scan_type() else {
        warn!(
            "Uploaded {} as {}, but scan type '{}' cannot be scanned from the CLI",
            target.file_name, target.hash, target.scan_type
        );
        return Ok(uploaded);
    };
    info!(
        "Uploaded {} as {} ({}), starting scan",
        target.file_name, target.hash, scan_type
    );

    let scan = with_spinner(
        &format!("Scanning {}...", target.file_name),
        client.scan(scan_type, &target.file_name, &target.hash, false),
    )
    .await
    .inspect_err(|_| {
        warn!(
            "Uploaded {} as {} ({}), but the scan failed. Retry with: mobsf scan {} {} {}",
            target.file_name,
            target.hash,
            scan_type,
            scan_type,
            target.file_name,
            target.hash
        );
    })?;

    Ok(json!({ "upload": uploaded, "scan": scan }))
}

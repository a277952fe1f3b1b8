//! Delete command implementation

use serde_json::Value;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::MobsfApi;
use crate::error::Result;
use crate::output;

/// Run the delete command
pub async fn run(opts: &GlobalOptions, hash: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let result = delete(&ctx.client, hash).await?;
    output::print(&result, OutputFormat::Json)
}

/// Delete a scan and its results
pub async fn delete<A: MobsfApi + ?Sized>(client: &A, hash: &str) -> Result<Value> {
    client.delete_scan(hash).await
}

//! JSON output formatting

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};

/// Indentation used for JSON written to report files
const FILE_INDENT: &[u8] = b"    ";

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Write data as JSON to `path` with four-space indentation.
pub fn write_json_file<T: Serialize + ?Sized>(data: &T, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(FILE_INDENT));
    data.serialize(&mut serializer)?;
    buf.push(b'\n');

    std::fs::write(path, buf).map_err(|e| Error::file(path, e))
}

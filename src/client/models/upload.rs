//! Upload models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};

use super::ScanType;

/// Fields of an upload response needed to start a scan of the uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Server-assigned scan hash
    pub hash: String,

    /// Package format detected by the server, kept as sent
    pub scan_type: String,

    /// File name as stored by the server
    pub file_name: String,
}

impl UploadedFile {
    /// Extract the scan identifiers from a raw upload response.
    pub fn from_response(response: &Value) -> Result<Self> {
        UploadedFile::deserialize(response).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "Upload response lacks scan identifiers: {}. Body was: {}",
                e, response
            ))
            .into()
        })
    }

    /// The detected format, if it is one the scan endpoint accepts
    pub fn known_scan_type(&self) -> Option<ScanType> {
        ScanType::from_wire(&self.scan_type)
    }
}

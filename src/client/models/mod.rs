//! MobSF API data models
//!
//! Responses are passed through as `serde_json::Value`; the types here cover
//! request parameters and the few response fields the CLI reads itself.

mod scan;
mod upload;

pub use scan::{ScanSummary, ScanType};
pub use upload::UploadedFile;

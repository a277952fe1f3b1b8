//! Scan models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Package format of an uploaded app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    /// Android application package
    Apk,
    /// Zipped source code (Android Studio / Xcode project)
    Zip,
    /// iOS application archive
    Ipa,
    /// Windows application package
    Appx,
}

impl ScanType {
    /// All scan types accepted by MobSF
    pub const ALL: [ScanType; 4] = [ScanType::Apk, ScanType::Zip, ScanType::Ipa, ScanType::Appx];

    /// Wire name of the scan type
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanType::Apk => "apk",
            ScanType::Zip => "zip",
            ScanType::Ipa => "ipa",
            ScanType::Appx => "appx",
        }
    }

    /// Parse a wire name, `None` for formats outside [`ScanType::ALL`]
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the `content` array returned by `/api/v1/scans`.
///
/// MobSF uses upper-case column names here; every field is optional since
/// the set differs between server versions and platforms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ScanSummary {
    /// MD5 of the uploaded file, used as the scan hash
    #[serde(default, rename = "MD5")]
    pub hash: Option<String>,

    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub scan_type: Option<String>,

    #[serde(default)]
    pub app_name: Option<String>,

    #[serde(default)]
    pub package_name: Option<String>,

    #[serde(default)]
    pub version_name: Option<String>,

    /// Server-formatted scan time
    #[serde(default)]
    pub timestamp: Option<String>,
}

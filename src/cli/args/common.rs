//! Common CLI types shared across commands

use clap::Args;

use crate::client::ScanType;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON as returned by the server (default)
    #[default]
    Json,
    /// Table format - one row per entry
    Table,
}

/// Package format accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScanTypeArg {
    Apk,
    Zip,
    Ipa,
    Appx,
}

impl From<ScanTypeArg> for ScanType {
    fn from(arg: ScanTypeArg) -> Self {
        match arg {
            ScanTypeArg::Apk => ScanType::Apk,
            ScanTypeArg::Zip => ScanType::Zip,
            ScanTypeArg::Ipa => ScanType::Ipa,
            ScanTypeArg::Appx => ScanType::Appx,
        }
    }
}

/// Positional arguments identifying a file within a scan.
///
/// Flatten this into commands that address an uploaded file:
/// ```ignore
/// Source {
///     #[command(flatten)]
///     target: ScanTargetArgs,
/// }
/// ```
#[derive(Args, Debug, Clone)]
pub struct ScanTargetArgs {
    /// Scan type
    #[arg(value_enum, value_name = "SCANTYPE")]
    pub scan_type: ScanTypeArg,

    /// The file name
    #[arg(value_name = "FILENAME")]
    pub file_name: String,

    /// Hash of the scan
    #[arg(value_name = "HASH")]
    pub hash: String,
}

//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod delete;
pub mod init;
pub mod report;
pub mod scan;
pub mod status;
pub mod upload;

pub use args::{GlobalOptions, OutputFormat, PaginationArgs, ScanTargetArgs, ScanTypeArg};
pub use context::CommandContext;

/// CLI for using the MobSF REST API
#[derive(Parser, Debug)]
#[command(name = "mobsf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Server where MobSF is running [default: http://127.0.0.1:8000]
    #[arg(long, short = 's', env = "MOBSF_SERVER", hide_env = true)]
    pub server: Option<String>,

    /// The REST API key of the MobSF instance
    #[arg(
        long = "apikey",
        short = 'k',
        env = "MOBSF_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long, global = true, env = "MOBSF_TIMEOUT", hide_env = true)]
    pub timeout: Option<u64>,

    /// Override config file location
    #[arg(long, global = true, env = "MOBSF_CONFIG", hide_env = true)]
    pub config: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a file to MobSF
    #[command(after_help = "EXAMPLES:\n  \
            mobsf upload app.apk            # Upload and scan\n  \
            mobsf upload app.ipa --noscan   # Upload only")]
    Upload {
        /// The file to upload
        file: PathBuf,

        /// Execute no scan after upload
        #[arg(long)]
        noscan: bool,
    },

    /// Scan an uploaded file with MobSF
    Scan {
        #[command(flatten)]
        target: ScanTargetArgs,

        /// Rescan the app, default is false
        #[arg(long, short = 'r')]
        rescan: bool,
    },

    /// List recent scans
    Scans {
        #[command(flatten)]
        pagination: PaginationArgs,

        /// Output format: json (default), table
        #[arg(long, short = 'f', value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Retrieve report of scan
    #[command(after_help = "EXAMPLES:\n  \
            mobsf report <hash> json                  # Print JSON report\n  \
            mobsf report <hash> json -o               # Write report_<hash>.json\n  \
            mobsf report <hash> json -o scan.json     # Write scan.json\n  \
            mobsf report <hash> pdf -o scan.pdf       # Write scan.pdf")]
    Report {
        /// Hash of the scan
        hash: String,

        /// The format which should be used for the report
        #[command(subcommand)]
        kind: ReportCommands,
    },

    /// View source code of a scan
    Source {
        #[command(flatten)]
        target: ScanTargetArgs,
    },

    /// Delete scan results
    Delete {
        /// Hash of the scan
        hash: String,
    },

    /// Write server and API key to the config file
    Init,

    /// Show the resolved configuration
    Status,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   mobsf completion bash > /etc/bash_completion.d/mobsf
  zsh:    mobsf completion zsh > \"${fpath[1]}/_mobsf\"
  fish:   mobsf completion fish > ~/.config/fish/completions/mobsf.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Report formats
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// JSON report, printed or written to a file
    Json {
        /// Store the report in a file. Without a value, 'report_<hash>.json' is used
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<Option<PathBuf>>,
    },

    /// PDF report, written to a file
    Pdf {
        /// The file in which the report is stored [default: report.pdf]
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

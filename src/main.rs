//! mobsf - command-line client for the MobSF REST API

use clap::{CommandFactory, Parser};

use mobsf_cli::cli::report::ReportTarget;
use mobsf_cli::cli::{self, Cli, Commands, GlobalOptions, ReportCommands};
use mobsf_cli::error::{ConfigError, Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let opts = GlobalOptions::from_cli(&cli);

    env_logger::Builder::new()
        .filter_level(opts.log_level())
        .parse_default_env()
        .init();

    if let Err(err) = run(cli.command, &opts).await {
        eprintln!("Error: {}", err);
        if matches!(err, Error::Config(ConfigError::MissingApiKey)) {
            eprintln!("\n{}", Cli::command().render_usage());
        }
        std::process::exit(err.exit_code());
    }
}

async fn run(command: Commands, opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Upload { file, noscan } => cli::upload::run(opts, &file, noscan).await,
        Commands::Scan { target, rescan } => cli::scan::run_scan(opts, &target, rescan).await,
        Commands::Scans { pagination, format } => {
            cli::scan::run_scans(opts, &pagination, format).await
        }
        Commands::Report { hash, kind } => match kind {
            ReportCommands::Json { output } => {
                cli::report::run_json(opts, &hash, ReportTarget::from_flag(output)).await
            }
            ReportCommands::Pdf { output } => {
                cli::report::run_pdf(opts, &hash, output.as_deref()).await
            }
        },
        Commands::Source { target } => cli::scan::run_source(opts, &target).await,
        Commands::Delete { hash } => cli::delete::run(opts, &hash).await,
        Commands::Init => cli::init::run(opts),
        Commands::Status => cli::status::run(opts),
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}

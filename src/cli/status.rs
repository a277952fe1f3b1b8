//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::client::DEFAULT_SERVER;
use crate::config::{Config, Source};
use crate::error::Result;

/// Run the status command to display the resolved configuration.
///
/// Never prints the API key itself and never contacts the server.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "MobSF CLI Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found)".dimmed()
        );
    }

    let settings = opts.settings()?;
    println!();

    match settings.server.as_deref() {
        Some(server) => println!("{} Server: {}", "✓".green(), server),
        None => println!(
            "{} Server: {} {}",
            "○".dimmed(),
            DEFAULT_SERVER,
            "(default)".dimmed()
        ),
    }

    match settings.api_key_source {
        Source::CommandLine => println!(
            "{} API key configured {}",
            "✓".green(),
            "(flag or MOBSF_API_KEY)".dimmed()
        ),
        Source::File => println!(
            "{} API key configured {}",
            "✓".green(),
            "(config file)".dimmed()
        ),
        Source::Default => {
            println!("{} API key not configured", "✗".red());
            println!("  → Run 'mobsf init' or set MOBSF_API_KEY");
        }
    }

    match settings.timeout {
        Some(timeout) => println!("{} Timeout: {}s", "✓".green(), timeout.as_secs()),
        None => println!("{} Timeout: {}", "○".dimmed(), "none".dimmed()),
    }

    Ok(())
}

//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::DEFAULT_SERVER;
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the server and API key and stores them in the config file.
/// Existing settings are kept as prompt defaults. The key is not checked
/// against the server.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let existing = Config::load_at(opts.config_ref()).unwrap_or_default();

    println!("{}", "MobSF CLI setup".bold().green());
    println!("Settings are stored in the config file and used when no flag or environment variable is given.\n");

    let theme = ColorfulTheme::default();

    let server: String = Input::with_theme(&theme)
        .with_prompt("MobSF server")
        .default(
            existing
                .server
                .clone()
                .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
        )
        .interact_text()?;

    let api_key: String = Password::with_theme(&theme)
        .with_prompt("REST API key")
        .allow_empty_password(existing.api_key.is_some())
        .interact()?;

    let config = merge(existing, server, api_key);
    let path = config.save_at(opts.config_ref())?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );
    println!("\n{}", "Try running:".bold());
    println!("  {} - Show configuration status", "mobsf status".cyan());
    println!("  {} - List recent scans", "mobsf scans".cyan());

    Ok(())
}

/// Apply prompt answers over the existing config. An empty key keeps the
/// stored one.
fn merge(mut config: Config, server: String, api_key: String) -> Config {
    let server = server.trim();
    config.server = if server.is_empty() {
        None
    } else {
        Some(server.to_string())
    };

    let api_key = api_key.trim();
    if !api_key.is_empty() {
        config.api_key = Some(api_key.to_string());
    }

    config
}

//! Configuration inspection commands.

use clap::{Args, Subcommand};

use crate::output;
use ladle_core::error::AppError;

/// Arguments for the config command
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        ConfigCommand::Show => {
            output::print_kv("server.host", &config.server.host);
            output::print_kv("server.port", &config.server.port.to_string());
            output::print_kv(
                "database.max_connections",
                &config.database.max_connections.to_string(),
            );
            output::print_kv(
                "auth.password_min_length",
                &config.auth.password_min_length.to_string(),
            );
            output::print_kv(
                "auth.registration_open",
                &config.auth.registration_open.to_string(),
            );
            output::print_kv(
                "session.absolute_timeout_hours",
                &config
                    .session
                    .absolute_timeout_hours
                    .map(|h| h.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            );
            output::print_kv("logging.level", &config.logging.level);
        }
    }

    Ok(())
}

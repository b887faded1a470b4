//! Session maintenance commands.

use chrono::{Duration, Utc};
use clap::{Args, Subcommand};

use crate::output;
use ladle_core::error::AppError;
use ladle_database::repositories::session::SessionRepository;

/// Arguments for the session command
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Session subcommand
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Delete revoked sessions older than the retention window
    Purge {
        /// Retention window in days
        #[arg(long, default_value_t = 30)]
        older_than_days: u32,
    },
}

/// Execute session commands
pub async fn execute(args: &SessionArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let repo = SessionRepository::new(pool);

    match &args.command {
        SessionCommand::Purge { older_than_days } => {
            let cutoff = Utc::now() - Duration::days(i64::from(*older_than_days));
            let deleted = repo.delete_revoked_before(cutoff).await?;
            output::print_success(&format!(
                "Purged {deleted} revoked session(s) older than {older_than_days} day(s)."
            ));
        }
    }

    Ok(())
}

//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod session;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use ladle_core::error::AppError;

/// Ladle: Catering Back Office
#[derive(Debug, Parser)]
#[command(name = "ladle", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Staff account management
    User(user::UserArgs),
    /// Session maintenance
    Session(session::SessionArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::User(args) => user::execute(args, &self.config, self.format).await,
            Commands::Session(args) => session::execute(args, &self.config).await,
            Commands::Config(args) => config::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<ladle_core::config::AppConfig, AppError> {
    ladle_core::config::AppConfig::load_file(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(
    config: &ladle_core::config::AppConfig,
) -> Result<sqlx::PgPool, AppError> {
    let pool = ladle_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}

//! Staff account management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use ladle_auth::password::{PasswordHasher, PasswordValidator};
use ladle_core::error::AppError;
use ladle_core::types::pagination::PageRequest;
use ladle_database::repositories::user::UserRepository;
use ladle_entity::user::model::CreateUser;
use ladle_entity::user::{AccountStatus, StaffRole};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List staff accounts
    List {
        /// Filter by status (pending/approved)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Approve a pending registration
    Approve {
        /// Username
        username: String,
    },
    /// Create an approved admin account (first-run bootstrap)
    CreateAdmin {
        /// Username
        username: String,
        /// Given name
        #[arg(long, default_value = "Admin")]
        first_name: String,
        /// Family name
        #[arg(long, default_value = "User")]
        last_name: String,
    },
    /// Change a user's role
    SetRole {
        /// Username
        username: String,
        /// New role (admin/cashier)
        role: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Username
    username: String,
    /// Full name
    name: String,
    /// Role
    role: String,
    /// Status
    status: String,
    /// Created at
    created_at: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let user_repo = UserRepository::new(pool.clone());

    match &args.command {
        UserCommand::List { status } => {
            let page = PageRequest::new(1, 100);
            let users = match status.as_deref() {
                Some(s) => {
                    let status: AccountStatus = s.parse()?;
                    user_repo.find_by_status(status, &page).await?
                }
                None => user_repo.find_all(&page).await?,
            };

            let rows: Vec<UserRow> = users
                .items
                .iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    username: u.username.clone(),
                    name: u.display_name(),
                    role: u.role.to_string(),
                    status: u.status.to_string(),
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
        UserCommand::Approve { username } => {
            let user = user_repo
                .find_by_username(username)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

            user_repo
                .update_status(user.id, AccountStatus::Approved)
                .await?;

            output::print_success(&format!("User '{}' approved", username));
        }
        UserCommand::CreateAdmin {
            username,
            first_name,
            last_name,
        } => {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

            PasswordValidator::new(&config.auth).validate(&password)?;
            let password_hash = PasswordHasher::new().hash_password(&password)?;

            let user = user_repo
                .create(&CreateUser {
                    username: username.clone(),
                    password_hash,
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                    role: StaffRole::Admin,
                })
                .await?;

            // CLI-created admins skip the approval queue.
            user_repo
                .update_status(user.id, AccountStatus::Approved)
                .await?;

            output::print_success(&format!("Admin '{}' created and approved", username));
            output::print_kv("id", &user.id.to_string());
        }
        UserCommand::SetRole { username, role } => {
            let role: StaffRole = role.parse()?;
            let user = user_repo
                .find_by_username(username)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

            user_repo.update_role(user.id, role).await?;

            output::print_success(&format!("User '{}' is now {}", username, role));
        }
    }

    Ok(())
}

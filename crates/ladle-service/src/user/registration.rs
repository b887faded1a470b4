//! Self-registration flow for new staff accounts.

use std::sync::Arc;

use tracing::info;

use ladle_auth::password::{PasswordHasher, PasswordValidator};
use ladle_core::config::AuthConfig;
use ladle_core::error::AppError;
use ladle_database::repositories::user::UserRepository;
use ladle_entity::user::model::CreateUser;
use ladle_entity::user::{StaffRole, User};

/// Data submitted by a prospective staff member.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Desired password.
    pub password: String,
    /// Re-typed password, must match exactly.
    pub confirm_password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Requested role.
    pub role: StaffRole,
}

/// Handles the self-registration flow.
///
/// Every self-registered account is created as pending. The requested
/// role is recorded but grants nothing until an admin approves the
/// account, so asking for `admin` only means waiting in the same queue.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Auth configuration.
    config: AuthConfig,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        config: AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            config,
        }
    }

    /// Registers a new staff account.
    ///
    /// All field validation happens before any store access: a mismatched
    /// confirmation or weak password is rejected without touching the
    /// database. The username pre-check gives a friendly error in the
    /// common case; the unique constraint on the `users` table closes the
    /// race between the check and the insert.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        if !self.config.registration_open {
            return Err(AppError::validation("Registration is currently closed"));
        }

        let username = req.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }

        if req.password != req.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }
        self.validator.validate(&req.password)?;

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Username '{username}' already exists"
            )));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
                first_name: req.first_name.trim().to_string(),
                last_name: req.last_name.trim().to_string(),
                role: req.role,
            })
            .await?;

        info!(
            user_id = %user.id,
            username = %user.username,
            role = %user.role,
            "New registration pending approval"
        );

        Ok(user)
    }
}

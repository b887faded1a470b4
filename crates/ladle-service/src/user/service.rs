//! User self-service operations: profile viewing and password changes.

use std::sync::Arc;

use tracing::info;

use ladle_auth::password::{PasswordHasher, PasswordValidator};
use ladle_auth::session::SessionManager;
use ladle_core::error::AppError;
use ladle_database::repositories::user::UserRepository;
use ladle_entity::user::User;

use crate::context::RequestContext;

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Session manager, for revoking sessions after a password change.
    session_manager: Arc<SessionManager>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        session_manager: Arc<SessionManager>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            session_manager,
        }
    }

    /// Gets the current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Changes the current user's password.
    ///
    /// Every session the user holds is revoked afterwards; the client
    /// must log in again with the new password.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), AppError> {
        let user = self.get_profile(ctx).await?;

        if !self.hasher.verify_password(current_password, &user.password_hash) {
            return Err(AppError::authentication("Current password is incorrect"));
        }

        if new_password != confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }
        self.validator.validate_not_same(current_password, new_password)?;
        self.validator.validate(new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.user_repo.update_password(user.id, &new_hash).await?;

        let revoked = self
            .session_manager
            .revoke_all_for_user(user.id, "password changed")
            .await?;

        info!(user_id = %ctx.user_id, sessions_revoked = revoked, "Password changed");

        Ok(())
    }
}

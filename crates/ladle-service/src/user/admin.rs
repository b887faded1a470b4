//! Admin account management: approvals, role changes, and removal.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use ladle_auth::session::SessionManager;
use ladle_core::error::AppError;
use ladle_core::types::pagination::{PageRequest, PageResponse};
use ladle_database::repositories::user::UserRepository;
use ladle_entity::user::{AccountStatus, StaffRole, User};

use crate::context::RequestContext;

/// Handles admin-only account management.
///
/// Role enforcement happens at the routing layer; by the time a call
/// reaches this service the caller is known to be an admin.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Session manager, for revoking sessions on account changes.
    session_manager: Arc<SessionManager>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(user_repo: Arc<UserRepository>, session_manager: Arc<SessionManager>) -> Self {
        Self {
            user_repo,
            session_manager,
        }
    }

    /// Lists all users, optionally filtered by account status.
    pub async fn list_users(
        &self,
        status: Option<AccountStatus>,
        page: &PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        match status {
            Some(status) => self.user_repo.find_by_status(status, page).await,
            None => self.user_repo.find_all(page).await,
        }
    }

    /// Approves a pending registration, letting the account log in.
    ///
    /// Approving an already-approved account is a no-op rather than an
    /// error.
    pub async fn approve(&self, ctx: &RequestContext, user_id: Uuid) -> Result<User, AppError> {
        let user = self
            .user_repo
            .update_status(user_id, AccountStatus::Approved)
            .await?;

        info!(
            admin_id = %ctx.user_id,
            user_id = %user.id,
            username = %user.username,
            "Registration approved"
        );

        Ok(user)
    }

    /// Changes a user's role.
    ///
    /// All of the user's sessions are revoked so the new role takes
    /// effect on their next login, not whenever their token expires.
    pub async fn change_role(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        role: StaffRole,
    ) -> Result<User, AppError> {
        if user_id == ctx.user_id {
            return Err(AppError::validation("Cannot change your own role"));
        }

        let user = self.user_repo.update_role(user_id, role).await?;
        self.session_manager
            .revoke_all_for_user(user_id, "role changed")
            .await?;

        info!(
            admin_id = %ctx.user_id,
            user_id = %user.id,
            role = %role,
            "Role changed"
        );

        Ok(user)
    }

    /// Deletes a user account and revokes all of its sessions.
    pub async fn delete(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        if user_id == ctx.user_id {
            return Err(AppError::validation("Cannot delete your own account"));
        }

        self.session_manager
            .revoke_all_for_user(user_id, "account deleted")
            .await?;

        let deleted = self.user_repo.delete(user_id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }

        info!(admin_id = %ctx.user_id, user_id = %user_id, "User deleted");

        Ok(())
    }
}

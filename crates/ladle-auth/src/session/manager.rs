//! Session lifecycle manager: login, logout, and token validation flows.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use ladle_core::error::AppError;
use ladle_database::repositories::user::UserRepository;
use ladle_entity::session::Session;
use ladle_entity::user::{AccountStatus, User};

use crate::password::PasswordHasher;

use super::store::SessionStore;
use super::token;

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginResult {
    /// The raw bearer token. Handed to the client once, never stored.
    pub token: String,
    /// Created session.
    #[serde(skip_serializing)]
    pub session: Session,
    /// The authenticated user.
    pub user: User,
}

/// Manages the complete session lifecycle.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Session persistence.
    session_store: Arc<SessionStore>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        session_store: Arc<SessionStore>,
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            session_store,
            user_repo,
            password_hasher,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Look up the user by exact username
    /// 2. Verify the password against the stored hash
    /// 3. Check account status
    /// 4. Generate an opaque token and persist its hash
    /// 5. Record the login time
    ///
    /// An unknown username and a wrong password produce the same error
    /// message, so a caller cannot probe which usernames exist. A pending
    /// account with correct credentials gets a distinct message, since by
    /// then the caller has already proven they own the account.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        if !self
            .password_hasher
            .verify_password(password, &user.password_hash)
        {
            warn!(username = %username, "Login failed: bad credentials");
            return Err(AppError::authentication("Invalid username or password"));
        }

        if user.status == AccountStatus::Pending {
            warn!(username = %username, "Login denied: account awaiting approval");
            return Err(AppError::authentication(
                "Account is awaiting administrator approval",
            ));
        }

        let raw_token = token::generate_token();
        let token_hash = token::hash_token(&raw_token);

        let session = self.session_store.create_session(user.id, &token_hash).await?;
        self.user_repo.update_last_login(user.id).await?;

        info!(
            user_id = %user.id,
            session_id = %session.id,
            role = %user.role,
            "User logged in"
        );

        Ok(LoginResult {
            token: raw_token,
            session,
            user,
        })
    }

    /// Validates a bearer token and returns the live session and its user.
    ///
    /// Every validation failure collapses to the same authentication error;
    /// the caller learns nothing about whether the token was unknown,
    /// revoked, or expired.
    pub async fn authenticate(&self, raw_token: &str) -> Result<(Session, User), AppError> {
        let token_hash = token::hash_token(raw_token);

        let session = self
            .session_store
            .find_by_token_hash(&token_hash)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid or expired session"))?;

        if !session.is_active(Utc::now()) {
            return Err(AppError::authentication("Invalid or expired session"));
        }

        let user = self
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid or expired session"))?;

        // Approval can be withdrawn while a session is live.
        if !user.can_login() {
            return Err(AppError::authentication("Invalid or expired session"));
        }

        self.session_store.touch_activity(session.id).await?;

        Ok((session, user))
    }

    /// Revokes the session identified by a bearer token.
    pub async fn logout(&self, raw_token: &str) -> Result<(), AppError> {
        let token_hash = token::hash_token(raw_token);

        let Some(session) = self.session_store.find_by_token_hash(&token_hash).await? else {
            // Logging out an unknown token is a no-op, not an error.
            return Ok(());
        };

        self.session_store.revoke_session(session.id, "logout").await?;
        info!(session_id = %session.id, user_id = %session.user_id, "User logged out");
        Ok(())
    }

    /// Revokes every session a user holds. Used by admin actions that
    /// change the account's standing (role change, deletion).
    pub async fn revoke_all_for_user(&self, user_id: Uuid, reason: &str) -> Result<u64, AppError> {
        let revoked = self.session_store.revoke_all_for_user(user_id, reason).await?;
        if revoked > 0 {
            info!(user_id = %user_id, count = revoked, reason = %reason, "Revoked user sessions");
        }
        Ok(revoked)
    }
}

//! Session storage operations wrapping the database repository.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use ladle_core::config::SessionConfig;
use ladle_core::error::AppError;
use ladle_database::repositories::session::SessionRepository;
use ladle_entity::session::Session;

/// Abstracts session persistence operations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Session database repository.
    repo: Arc<SessionRepository>,
    /// Session configuration.
    config: SessionConfig,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(repo: Arc<SessionRepository>, config: SessionConfig) -> Self {
        Self { repo, config }
    }

    /// Creates a new session record for a user.
    ///
    /// The absolute expiry is only set when the deployment configures one;
    /// by default sessions live until logout or revocation.
    pub async fn create_session(
        &self,
        user_id: Uuid,
        token_hash: &str,
    ) -> Result<Session, AppError> {
        let now = Utc::now();
        let expires_at = self
            .config
            .absolute_timeout_hours
            .map(|hours| now + Duration::hours(hours as i64));

        let session = Session {
            id: Uuid::new_v4(),
            user_id,
            token_hash: token_hash.to_string(),
            created_at: now,
            last_activity: now,
            expires_at,
            revoked_at: None,
            revoked_reason: None,
        };

        self.repo.create(&session).await?;

        Ok(session)
    }

    /// Finds a session by its token hash.
    pub async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AppError> {
        self.repo.find_by_token_hash(token_hash).await
    }

    /// Updates a session's last activity timestamp.
    pub async fn touch_activity(&self, session_id: Uuid) -> Result<(), AppError> {
        self.repo.touch(session_id, Utc::now()).await
    }

    /// Marks a session as revoked.
    pub async fn revoke_session(&self, session_id: Uuid, reason: &str) -> Result<(), AppError> {
        self.repo.revoke(session_id, reason, Utc::now()).await
    }

    /// Revokes every active session belonging to a user.
    pub async fn revoke_all_for_user(&self, user_id: Uuid, reason: &str) -> Result<u64, AppError> {
        self.repo
            .revoke_all_for_user(user_id, reason, Utc::now())
            .await
    }
}

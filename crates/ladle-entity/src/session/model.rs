//! Session entity model.
//!
//! A session is the explicit, server-held identity object created on
//! login. Only a SHA-256 hash of the bearer token is stored; the raw
//! token exists nowhere but in the client's hands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// SHA-256 hash of the bearer token.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// Last time the session was used.
    pub last_activity: DateTime<Utc>,
    /// Absolute expiry, if the deployment configures one.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the session was revoked (logout or admin action).
    pub revoked_at: Option<DateTime<Utc>>,
    /// Why the session was revoked.
    pub revoked_reason: Option<String>,
}

impl Session {
    /// Check whether the session is still usable.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        if self.revoked_at.is_some() {
            return false;
        }
        match self.expires_at {
            Some(expires_at) => expires_at > now,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(expires_at: Option<DateTime<Utc>>, revoked_at: Option<DateTime<Utc>>) -> Session {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token_hash: "h".to_string(),
            created_at: now,
            last_activity: now,
            expires_at,
            revoked_at,
            revoked_reason: None,
        }
    }

    #[test]
    fn test_active_without_expiry() {
        assert!(session(None, None).is_active(Utc::now()));
    }

    #[test]
    fn test_revoked_is_inactive() {
        assert!(!session(None, Some(Utc::now())).is_active(Utc::now()));
    }

    #[test]
    fn test_expired_is_inactive() {
        let past = Utc::now() - chrono::Duration::hours(1);
        assert!(!session(Some(past), None).is_active(Utc::now()));
    }
}

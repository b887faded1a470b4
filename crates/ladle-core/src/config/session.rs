//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
///
/// Sessions are unbounded by default: a token stays valid until logout or
/// an admin revocation. An absolute timeout can be opted into for
/// deployments that want forced re-authentication.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Absolute session lifetime in hours. `None` means no expiry.
    #[serde(default)]
    pub absolute_timeout_hours: Option<u64>,
}

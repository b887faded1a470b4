//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// The Argon2 cost parameters are fixed at the library defaults and are
/// deliberately not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length for new passwords.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Whether self-registration is open.
    ///
    /// When disabled, new accounts can only be created via the CLI.
    #[serde(default = "default_true")]
    pub registration_open: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min(),
            registration_open: true,
        }
    }
}

fn default_password_min() -> usize {
    6
}

fn default_true() -> bool {
    true
}

//! # ladle-auth
//!
//! Authentication and authorization for the Ladle back office.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and policy enforcement
//! - `session`: Bearer token generation and session lifecycle (login,
//!   logout, validation)
//! - `rbac`: Role-based access control enforcement

pub mod password;
pub mod rbac;
pub mod session;

pub use password::{PasswordHasher, PasswordValidator};
pub use session::{LoginResult, SessionManager, SessionStore};

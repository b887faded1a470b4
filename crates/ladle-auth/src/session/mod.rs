//! Session lifecycle: opaque bearer tokens backed by server-side records.

pub mod manager;
pub mod store;
pub mod token;

pub use manager::{LoginResult, SessionManager};
pub use store::SessionStore;

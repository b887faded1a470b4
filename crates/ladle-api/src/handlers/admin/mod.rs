//! Admin-only handlers.

pub mod reports;
pub mod users;

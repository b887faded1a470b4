//! Role-based access control.

pub mod enforcer;

pub use enforcer::require_at_least;

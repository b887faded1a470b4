//! HTTP middleware: authentication, role gating, and request logging.

pub mod auth;
pub mod logging;
pub mod rbac;

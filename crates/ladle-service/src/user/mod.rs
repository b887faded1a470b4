//! User-facing services: self-registration, self-service, and admin
//! account management.

pub mod admin;
pub mod registration;
pub mod service;

pub use admin::AdminUserService;
pub use registration::RegistrationService;
pub use service::UserService;

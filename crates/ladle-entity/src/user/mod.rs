//! User domain entities.

pub mod model;
pub mod role;
pub mod status;

pub use model::{CreateUser, User};
pub use role::StaffRole;
pub use status::AccountStatus;

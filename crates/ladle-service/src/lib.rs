//! # ladle-service
//!
//! Business logic service layer for Ladle. Each service orchestrates
//! repositories and authentication to implement application-level use
//! cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod payment;
pub mod report;
pub mod user;

pub use context::RequestContext;
pub use payment::PaymentService;
pub use report::SalesReportService;
pub use user::{AdminUserService, RegistrationService, UserService};

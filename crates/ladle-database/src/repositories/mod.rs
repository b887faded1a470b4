//! Concrete repository implementations.

pub mod payment;
pub mod session;
pub mod user;

pub use payment::PaymentRepository;
pub use session::SessionRepository;
pub use user::UserRepository;

//! Payment capture at the register.

pub mod service;

pub use service::PaymentService;

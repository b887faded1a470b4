//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use ladle_auth::session::manager::SessionManager;
use ladle_core::config::AppConfig;

use ladle_service::payment::service::PaymentService;
use ladle_service::report::sales::SalesReportService;
use ladle_service::user::admin::AdminUserService;
use ladle_service::user::registration::RegistrationService;
use ladle_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Registration service
    pub registration_service: Arc<RegistrationService>,
    /// User self-service
    pub user_service: Arc<UserService>,
    /// Admin account management
    pub admin_user_service: Arc<AdminUserService>,
    /// Payment capture service
    pub payment_service: Arc<PaymentService>,
    /// Sales report service
    pub report_service: Arc<SalesReportService>,
}

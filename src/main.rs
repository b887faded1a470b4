//! Ladle Server: Catering Back Office
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::IntoFuture;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use ladle_core::config::AppConfig;
use ladle_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("LADLE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Ladle v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = ladle_database::connection::DatabasePool::connect(&config.database).await?;
    let db_pool = db.into_pool();

    ladle_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(ladle_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let session_repo = Arc::new(
        ladle_database::repositories::session::SessionRepository::new(db_pool.clone()),
    );
    let payment_repo = Arc::new(
        ladle_database::repositories::payment::PaymentRepository::new(db_pool.clone()),
    );

    // ── Step 3: Auth system ──────────────────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = Arc::new(ladle_auth::password::hasher::PasswordHasher::new());
    let password_validator = Arc::new(ladle_auth::password::validator::PasswordValidator::new(
        &config.auth,
    ));
    let session_store = Arc::new(ladle_auth::session::store::SessionStore::new(
        Arc::clone(&session_repo),
        config.session.clone(),
    ));
    let session_manager = Arc::new(ladle_auth::session::manager::SessionManager::new(
        Arc::clone(&session_store),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));

    // ── Step 4: Services ─────────────────────────────────────────
    tracing::info!("Initializing services...");
    let registration_service = Arc::new(
        ladle_service::user::registration::RegistrationService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            config.auth.clone(),
        ),
    );
    let user_service = Arc::new(ladle_service::user::service::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&session_manager),
    ));
    let admin_user_service = Arc::new(ladle_service::user::admin::AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&session_manager),
    ));
    let payment_service = Arc::new(ladle_service::payment::service::PaymentService::new(
        Arc::clone(&payment_repo),
    ));
    let report_service = Arc::new(ladle_service::report::sales::SalesReportService::new(
        Arc::clone(&payment_repo),
    ));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = ladle_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        session_manager: Arc::clone(&session_manager),
        registration_service,
        user_service,
        admin_user_service,
        payment_service,
        report_service,
    };

    let app = ladle_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Ladle server listening on {}", addr);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(());
    });

    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
    let drained = serve_with_grace(server.into_future(), shutdown_rx, grace)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if drained {
        tracing::info!("Ladle server shut down gracefully");
    } else {
        tracing::warn!(
            "Shutdown grace period of {}s expired; dropping remaining connections",
            config.server.shutdown_grace_seconds
        );
    }
    Ok(())
}

/// Drives the server to completion, bounding the post-signal drain.
///
/// Once the shutdown signal fires, in-flight connections get `grace` to
/// finish before the server future is dropped. Returns `true` when the
/// server drained within the grace window, `false` when it was cut off.
async fn serve_with_grace<S>(
    server: S,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
    grace: std::time::Duration,
) -> std::io::Result<bool>
where
    S: std::future::Future<Output = std::io::Result<()>>,
{
    tokio::pin!(server);

    let deadline = async {
        let _ = shutdown_rx.await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = &mut server => result.map(|()| true),
        _ = deadline => Ok(false),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::serve_with_grace;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_grace_expiry_cuts_off_a_stalled_drain() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let stalled = std::future::pending::<std::io::Result<()>>();

        tx.send(()).unwrap();
        let drained = serve_with_grace(stalled, rx, Duration::from_secs(30))
            .await
            .unwrap();
        assert!(!drained);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clean_drain_finishes_before_the_deadline() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let server = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        };

        tx.send(()).unwrap();
        let drained = serve_with_grace(server, rx, Duration::from_secs(30))
            .await
            .unwrap();
        assert!(drained);
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_exit_without_a_signal_reports_drained() {
        let (_tx, rx) = tokio::sync::oneshot::channel();
        let server = async { Ok(()) };

        let drained = serve_with_grace(server, rx, Duration::from_secs(30))
            .await
            .unwrap();
        assert!(drained);
    }
}

//! Shared test helpers for integration tests.
//!
//! The tests need a real PostgreSQL instance. Set `LADLE_TEST_DATABASE_URL`
//! to run them; without it every test skips itself.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use ladle_core::config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, LoggingConfig, ServerConfig, SessionConfig,
};
use ladle_entity::user::model::CreateUser;
use ladle_entity::user::{AccountStatus, StaffRole, User};

/// Response from a test request.
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    pub async fn new() -> Option<Self> {
        let Ok(url) = std::env::var("LADLE_TEST_DATABASE_URL") else {
            eprintln!("LADLE_TEST_DATABASE_URL not set; skipping test");
            return None;
        };

        let config = test_config(url);

        let db = ladle_database::connection::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = db.into_pool();

        ladle_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let user_repo = Arc::new(ladle_database::repositories::user::UserRepository::new(
            db_pool.clone(),
        ));
        let session_repo = Arc::new(
            ladle_database::repositories::session::SessionRepository::new(db_pool.clone()),
        );
        let payment_repo = Arc::new(
            ladle_database::repositories::payment::PaymentRepository::new(db_pool.clone()),
        );

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

        let app_state = ladle_api::state::AppState {
            config: Arc::new(config),
            db_pool: db_pool.clone(),
            session_manager,
            registration_service,
            user_service,
            admin_user_service,
            payment_service,
            report_service,
        };

        let router = ladle_api::router::build_router(app_state);

        Some(Self { router, db_pool })
    }

    /// Send a request to the test application.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Create a user directly in the store.
    pub async fn create_test_user(
        &self,
        username: &str,
        password: &str,
        role: StaffRole,
        status: AccountStatus,
    ) -> User {
        let hasher = ladle_auth::password::hasher::PasswordHasher::new();
        let password_hash = hasher.hash_password(password).expect("hash failed");

        let repo = ladle_database::repositories::user::UserRepository::new(self.db_pool.clone());
        let user = repo
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                role,
            })
            .await
            .expect("Failed to create test user");

        if status == AccountStatus::Approved {
            repo.update_status(user.id, status)
                .await
                .expect("Failed to approve test user")
        } else {
            user
        }
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["data"]["token"]
            .as_str()
            .expect("missing token")
            .to_string()
    }
}

/// Generate a unique username so concurrent tests never collide.
pub fn unique_username(prefix: &str) -> String {
    format!("{prefix}-{}", &Uuid::new_v4().to_string()[..8])
}

fn test_config(database_url: String) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            shutdown_grace_seconds: 1,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        auth: AuthConfig::default(),
        session: SessionConfig::default(),
        logging: LoggingConfig::default(),
    }
}

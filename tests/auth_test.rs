//! Login, session, and password change flows.

mod helpers;

use helpers::{TestApp, unique_username};
use http::StatusCode;
use ladle_entity::user::{AccountStatus, StaffRole};
use serde_json::json;

#[tokio::test]
async fn login_succeeds_for_approved_user() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let username = unique_username("login-ok");
    app.create_test_user(&username, "secret123", StaffRole::Cashier, AccountStatus::Approved)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": username, "password": "secret123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
    assert!(response.body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(response.body["data"]["user"]["username"], json!(username));
    assert_eq!(response.body["data"]["user"]["role"], json!("cashier"));
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let username = unique_username("login-badpw");
    let user = app
        .create_test_user(&username, "secret123", StaffRole::Cashier, AccountStatus::Approved)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": username, "password": "wrong-password" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], json!("Invalid username or password"));

    // A failed login must leave no session behind.
    let session_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE user_id = $1")
            .bind(user.id)
            .fetch_one(&app.db_pool)
            .await
            .expect("session count query failed");
    assert_eq!(session_count, 0);
}

#[tokio::test]
async fn login_rejects_unknown_username_with_same_message() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "username": unique_username("no-such-user"),
                "password": "whatever",
            })),
            None,
        )
        .await;

    // Unknown user and wrong password are indistinguishable to the caller.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], json!("Invalid username or password"));
}

#[tokio::test]
async fn login_rejects_pending_account_with_approval_message() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let username = unique_username("login-pending");
    app.create_test_user(&username, "secret123", StaffRole::Cashier, AccountStatus::Pending)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": username, "password": "secret123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        json!("Account is awaiting administrator approval")
    );
}

#[tokio::test]
async fn me_returns_the_authenticated_profile() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let username = unique_username("me");
    app.create_test_user(&username, "secret123", StaffRole::Cashier, AccountStatus::Approved)
        .await;
    let token = app.login(&username, "secret123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], json!(username));
    assert_eq!(response.body["data"]["status"], json!("approved"));
}

#[tokio::test]
async fn me_without_token_is_unauthorized() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_garbage_token_is_unauthorized() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], json!("Invalid or expired session"));
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let username = unique_username("logout");
    app.create_test_user(&username, "secret123", StaffRole::Cashier, AccountStatus::Approved)
        .await;
    let token = app.login(&username, "secret123").await;

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn change_password_revokes_every_session() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let username = unique_username("chpw");
    app.create_test_user(&username, "old-secret", StaffRole::Cashier, AccountStatus::Approved)
        .await;
    let token = app.login(&username, "old-secret").await;
    let second_token = app.login(&username, "old-secret").await;

    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(json!({
                "current_password": "old-secret",
                "new_password": "new-secret",
                "confirm_password": "new-secret",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    // Both sessions are gone, including the one that made the change.
    for t in [&token, &second_token] {
        let me = app.request("GET", "/api/auth/me", None, Some(t)).await;
        assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    }

    // Old password no longer works, new one does.
    let old_login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": username, "password": "old-secret" })),
            None,
        )
        .await;
    assert_eq!(old_login.status, StatusCode::UNAUTHORIZED);

    app.login(&username, "new-secret").await;
}

#[tokio::test]
async fn change_password_rejects_wrong_current_password() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let username = unique_username("chpw-wrong");
    app.create_test_user(&username, "secret123", StaffRole::Cashier, AccountStatus::Approved)
        .await;
    let token = app.login(&username, "secret123").await;

    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(json!({
                "current_password": "not-the-password",
                "new_password": "new-secret",
                "confirm_password": "new-secret",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // The session survives a failed attempt.
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], json!("ok"));
}

//! Role gates on the admin route group.

mod helpers;

use helpers::{TestApp, unique_username};
use http::StatusCode;
use ladle_entity::user::{AccountStatus, StaffRole};
use serde_json::json;

#[tokio::test]
async fn cashier_cannot_access_admin_routes() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let username = unique_username("rbac-cashier");
    app.create_test_user(&username, "secret123", StaffRole::Cashier, AccountStatus::Approved)
        .await;
    let token = app.login(&username, "secret123").await;

    for path in [
        "/api/admin/users",
        "/api/admin/reports/sales?from=2026-01-01T00:00:00Z&to=2026-12-31T00:00:00Z",
    ] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "path: {path}");
        assert_eq!(response.body["error"], json!("FORBIDDEN"));
    }
}

#[tokio::test]
async fn admin_routes_require_authentication() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/api/admin/users", None, None).await;

    // Missing credentials are a 401, not a 403.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_can_list_users_filtered_by_status() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let admin = unique_username("rbac-admin");
    app.create_test_user(&admin, "admin-secret", StaffRole::Admin, AccountStatus::Approved)
        .await;
    let token = app.login(&admin, "admin-secret").await;

    let pending = unique_username("rbac-pending");
    app.create_test_user(&pending, "secret123", StaffRole::Cashier, AccountStatus::Pending)
        .await;

    let response = app
        .request(
            "GET",
            "/api/admin/users?status=pending&per_page=100",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert!(items.iter().all(|u| u["status"] == json!("pending")));
    assert!(items.iter().any(|u| u["username"] == json!(pending)));
}

#[tokio::test]
async fn role_change_revokes_the_users_sessions() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let admin = unique_username("rbac-promoter");
    app.create_test_user(&admin, "admin-secret", StaffRole::Admin, AccountStatus::Approved)
        .await;
    let admin_token = app.login(&admin, "admin-secret").await;

    let cashier = unique_username("rbac-promotee");
    let user = app
        .create_test_user(&cashier, "secret123", StaffRole::Cashier, AccountStatus::Approved)
        .await;
    let cashier_token = app.login(&cashier, "secret123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{}/role", user.id),
            Some(json!({ "role": "admin" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["role"], json!("admin"));

    // The promoted user's old session no longer carries the old role.
    let me = app
        .request("GET", "/api/auth/me", None, Some(&cashier_token))
        .await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    // A fresh login picks up the new role and passes the admin gate.
    let new_token = app.login(&cashier, "secret123").await;
    let list = app
        .request("GET", "/api/admin/users", None, Some(&new_token))
        .await;
    assert_eq!(list.status, StatusCode::OK);
}

#[tokio::test]
async fn admin_cannot_change_own_role() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let admin = unique_username("rbac-self");
    let user = app
        .create_test_user(&admin, "admin-secret", StaffRole::Admin, AccountStatus::Approved)
        .await;
    let token = app.login(&admin, "admin-secret").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{}/role", user.id),
            Some(json!({ "role": "cashier" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_cannot_delete_own_account() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let admin = unique_username("rbac-selfdel");
    let user = app
        .create_test_user(&admin, "admin-secret", StaffRole::Admin, AccountStatus::Approved)
        .await;
    let token = app.login(&admin, "admin-secret").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{}", user.id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_a_user_revokes_their_sessions() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let admin = unique_username("rbac-deleter");
    app.create_test_user(&admin, "admin-secret", StaffRole::Admin, AccountStatus::Approved)
        .await;
    let admin_token = app.login(&admin, "admin-secret").await;

    let victim = unique_username("rbac-deleted");
    let user = app
        .create_test_user(&victim, "secret123", StaffRole::Cashier, AccountStatus::Approved)
        .await;
    let victim_token = app.login(&victim, "secret123").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{}", user.id),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let me = app
        .request("GET", "/api/auth/me", None, Some(&victim_token))
        .await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": victim, "password": "secret123" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn approve_is_idempotent() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let admin = unique_username("rbac-approver");
    app.create_test_user(&admin, "admin-secret", StaffRole::Admin, AccountStatus::Approved)
        .await;
    let token = app.login(&admin, "admin-secret").await;

    let pending = unique_username("rbac-twice");
    let user = app
        .create_test_user(&pending, "secret123", StaffRole::Cashier, AccountStatus::Pending)
        .await;

    for _ in 0..2 {
        let response = app
            .request(
                "PUT",
                &format!("/api/admin/users/{}/approve", user.id),
                None,
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        assert_eq!(response.body["data"]["status"], json!("approved"));
    }
}

//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use ladle_core::types::pagination::PageResponse;
use ladle_entity::user::{AccountStatus, StaffRole};

use crate::dto::request::{ChangeRoleRequest, UserListQuery};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<UserListQuery>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, ApiError> {
    let status = filter
        .status
        .as_deref()
        .map(str::parse::<AccountStatus>)
        .transpose()?;

    let page = params.into_page_request();
    let users = state.admin_user_service.list_users(status, &page).await?;

    let items: Vec<UserResponse> = users.items.into_iter().map(UserResponse::from).collect();
    let response = PageResponse::new(items, users.page, users.page_size, users.total_items);

    Ok(Json(ApiResponse::ok(response)))
}

/// PUT /api/admin/users/{id}/approve
pub async fn approve_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.admin_user_service.approve(&auth, user_id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let role: StaffRole = req.role.parse()?;
    let user = state
        .admin_user_service
        .change_role(&auth, user_id, role)
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.admin_user_service.delete(&auth, user_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}

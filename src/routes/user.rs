use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::{
    error::ApiError,
    models::user::{AuthIdentity, DeleteUserRequest, UpdateUserRequest, UserProfile},
    rpc::CallContext,
    AppState,
};

use super::validation::validate_min_len;

pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update user.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete user.";

/// GET /user
pub async fn get_user(
    State(state): State<AppState>,
    ctx: CallContext,
    identity: AuthIdentity,
) -> Result<Json<UserProfile>, ApiError> {
    state
        .users
        .get_user(&ctx, &identity)
        .await
        .map(|u| Json(u.into()))
        .map_err(|_| ApiError::new(StatusCode::NOT_FOUND, "User does not exist."))
}

/// PUT /user
pub async fn update_user(
    State(state): State<AppState>,
    ctx: CallContext,
    identity: AuthIdentity,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    if let Some(password) = body.password.as_deref() {
        validate_min_len("password", password, 8)?;
    }

    state
        .users
        .update_user(&ctx, &identity, body.name, body.password)
        .await
        .map(|u| Json(u.into()))
        .map_err(|e| {
            info!(error = %e, user_id = %identity.user_id, "user update failed");
            ApiError::bad_request(UPDATE_FAILED_MESSAGE)
        })
}

/// POST /user/delete
pub async fn delete_user(
    State(state): State<AppState>,
    ctx: CallContext,
    identity: AuthIdentity,
    Json(body): Json<DeleteUserRequest>,
) -> Result<Json<Value>, ApiError> {
    state
        .users
        .delete_user(&ctx, &identity, &body.password)
        .await
        .map(|_| Json(json!({ "message": "User deleted" })))
        .map_err(|e| {
            error!(error = %e, user_id = %identity.user_id, "user delete failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILED_MESSAGE)
        })
}

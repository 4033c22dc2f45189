use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    error::{ApiError, GatewayError},
    middleware::auth::bearer_token,
    models::{
        auth::{RefreshTokenRequest, SignInQuery, SignInRequest, Token},
        user::SignUpRequest,
    },
    rpc::CallContext,
    use_cases::user::SignUp,
    AppState,
};

use super::validation::{validate_email, validate_min_len};

/// POST /auth/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    ctx: CallContext,
    Json(body): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate_email(&body.email)?;
    validate_min_len("name", &body.name, 3)?;
    validate_min_len("password", &body.password, 8)?;

    let sign_up = SignUp {
        name: body.name,
        email: body.email,
        password: body.password,
        role: body.role,
    };

    state
        .users
        .create_user(&ctx, sign_up)
        .await
        .map(|_| (StatusCode::CREATED, Json(json!({ "message": "User created" }))))
        .map_err(|e| {
            info!(error = %e, "sign-up failed");
            ApiError::bad_request("Failed to create user.")
        })
}

/// POST /auth/sign-in?type=password
pub async fn sign_in(
    State(state): State<AppState>,
    ctx: CallContext,
    Query(query): Query<SignInQuery>,
    Json(body): Json<SignInRequest>,
) -> Result<Json<Token>, ApiError> {
    if !query.kind.eq_ignore_ascii_case("password") {
        return Err(ApiError::bad_request("Unsupported sign-in type."));
    }
    validate_min_len("password", &body.password, 8)?;

    state
        .auth
        .login(&ctx, &body.email, &body.password)
        .await
        .map(Json)
        .map_err(|_| ApiError::bad_request("Please check your email or password."))
}

/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    ctx: CallContext,
    Json(body): Json<RefreshTokenRequest>,
) -> Result<(StatusCode, Json<Token>), ApiError> {
    state
        .auth
        .refresh_token(&ctx, &body.refresh_token)
        .await
        .map(|token| (StatusCode::CREATED, Json(token)))
        .map_err(|_| ApiError::new(StatusCode::UNAUTHORIZED, "Token is not valid."))
}

/// POST /auth/sign-out
///
/// Only mounted behind `require_auth`, so the header has already been checked.
pub async fn sign_out(
    State(state): State<AppState>,
    ctx: CallContext,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers).ok_or(GatewayError::AuthHeaderInvalid)?;

    state
        .auth
        .logout(&ctx, token)
        .await
        .map(|_| Json(json!({ "message": "Signed out" })))
        .map_err(|e| {
            info!(error = %e, "sign-out failed");
            ApiError::bad_request("Failed to sign out.")
        })
}

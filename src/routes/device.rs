use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::ApiError,
    models::{
        device::{RegisterDeviceRequest, RegisterDeviceResponse},
        user::AuthIdentity,
    },
    AppState,
};

use super::validation::validate_min_len;

/// POST /device
///
/// Registers a device for the authenticated user.
pub async fn register_device(
    State(state): State<AppState>,
    identity: AuthIdentity,
    Json(body): Json<RegisterDeviceRequest>,
) -> Result<(StatusCode, Json<RegisterDeviceResponse>), ApiError> {
    validate_min_len("title", &body.title, 1)?;

    let id = state.devices.register_device(&identity, body).await?;
    Ok((StatusCode::CREATED, Json(RegisterDeviceResponse { id })))
}

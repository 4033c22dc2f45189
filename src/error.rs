use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const AUTH_HEADER_INVALID_MESSAGE: &str = "Authorization header is missing or invalid.";
pub const TOKEN_INVALID_MESSAGE: &str = "Access token is not valid.";
pub const REMOTE_PROTOCOL_MESSAGE: &str = "malformed error from remote service";

/// Failures surfaced by the gateway core, before any HTTP status is chosen.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{}", AUTH_HEADER_INVALID_MESSAGE)]
    AuthHeaderInvalid,

    #[error("{}", TOKEN_INVALID_MESSAGE)]
    TokenInvalid,

    /// Status message returned by the authority, verbatim.
    #[error("{0}")]
    Remote(String),

    #[error("{}", REMOTE_PROTOCOL_MESSAGE)]
    RemoteProtocol,

    #[error("user creation rejected: {0}")]
    UserCreationRejected(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("transaction failed")]
    TransactionFailure(#[source] sqlx::Error),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

/// HTTP-visible error: a status plus the message placed in `{"error": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: Cow<'static, str>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Default status mapping. Handlers override it where the calling operation
/// gives the failure a more specific meaning.
impl From<GatewayError> for ApiError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::AuthHeaderInvalid => {
                ApiError::new(StatusCode::FORBIDDEN, AUTH_HEADER_INVALID_MESSAGE)
            }
            GatewayError::TokenInvalid => ApiError::new(StatusCode::FORBIDDEN, TOKEN_INVALID_MESSAGE),
            GatewayError::UserCreationRejected(_) => {
                ApiError::bad_request("Failed to create user.")
            }
            GatewayError::NotFound(what) => {
                ApiError::new(StatusCode::NOT_FOUND, format!("{what} not found."))
            }
            GatewayError::Remote(_)
            | GatewayError::RemoteProtocol
            | GatewayError::TransactionFailure(_)
            | GatewayError::Database(_) => ApiError::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_detail_never_reaches_the_client() {
        let api: ApiError = GatewayError::Remote("dial tcp 10.0.0.3:50051: refused".into()).into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Internal server error");

        let api: ApiError = GatewayError::TransactionFailure(sqlx::Error::RowNotFound).into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Internal server error");
    }

    #[test]
    fn auth_failures_are_forbidden() {
        let header: ApiError = GatewayError::AuthHeaderInvalid.into();
        let token: ApiError = GatewayError::TokenInvalid.into();
        assert_eq!(header.status, StatusCode::FORBIDDEN);
        assert_eq!(token.status, StatusCode::FORBIDDEN);
        assert_eq!(token.message, TOKEN_INVALID_MESSAGE);
    }

    #[test]
    fn creation_rejection_is_bad_request() {
        let api: ApiError = GatewayError::UserCreationRejected("duplicate email".into()).into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
    }
}

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{error, info};

use crate::{
    error::{ApiError, GatewayError},
    models::user::AuthIdentity,
    rpc::CallContext,
    AppState,
};

pub const BEARER_PREFIX: &str = "Bearer ";

/// Returns the raw credential of a `Bearer` authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
}

/// Guards protected routes.
///
/// Validates the bearer token with the authority and stores the resulting
/// [`AuthIdentity`] in the request extensions. Any failure ends the request
/// with 403; missing headers never reach the authority, and rejected tokens
/// all get the same answer whatever the authority's reason.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = match bearer_token(request.headers()) {
        Some(token) => token.to_string(),
        None => {
            info!(path = %request.uri().path(), "Authorization header missing or malformed");
            return Err(GatewayError::AuthHeaderInvalid.into());
        }
    };

    let ctx = CallContext::from_request(request.headers(), request.extensions());
    let identity = state.auth.validate(&ctx, &token).await.map_err(|e| {
        info!(error = %e, path = %request.uri().path(), "Access token rejected");
        ApiError::from(GatewayError::TokenInvalid)
    })?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Identity placed in the request by [`require_auth`].
///
/// Only protected routes may use this extractor. Its absence means the route
/// was registered without the middleware, so it is answered as a server
/// error, never as an anonymous caller.
impl<S> FromRequestParts<S> for AuthIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthIdentity>().cloned().ok_or_else(|| {
            error!(path = %parts.uri.path(), "AuthIdentity missing; route is not behind require_auth");
            ApiError::internal()
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn strips_the_bearer_scheme() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
    }

    #[test]
    fn rejects_other_schemes_and_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("bearer abc")), None);
        assert_eq!(bearer_token(&headers("Bearerabc")), None);
    }
}

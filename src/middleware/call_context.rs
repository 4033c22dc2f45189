use std::{convert::Infallible, net::SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts, Extensions, HeaderMap},
};

use crate::rpc::CallContext;

impl CallContext {
    /// Builds the context from the inbound request.
    ///
    /// The client IP is taken from `CF-Connecting-IP` (the service runs behind
    /// Cloudflare), then the first `X-Forwarded-For` hop, then the socket peer.
    pub fn from_request(headers: &HeaderMap, extensions: &Extensions) -> Self {
        let header_str = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        let client_ip = header_str("CF-Connecting-IP")
            .or_else(|| header_str("X-Forwarded-For").and_then(|v| v.split(',').next()).map(str::trim))
            .map(str::to_string)
            .or_else(|| {
                extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip().to_string())
            });

        Self {
            user_agent: header_str(header::USER_AGENT.as_str()).map(str::to_string),
            client_ip,
        }
    }
}

impl<S> FromRequestParts<S> for CallContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CallContext::from_request(&parts.headers, &parts.extensions))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn cloudflare_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("CF-Connecting-IP", HeaderValue::from_static("198.51.100.4"));
        headers.insert("X-Forwarded-For", HeaderValue::from_static("10.0.0.1, 10.0.0.2"));
        headers.insert(header::USER_AGENT, HeaderValue::from_static("app/1.0"));

        let ctx = CallContext::from_request(&headers, &Extensions::new());
        assert_eq!(ctx.client_ip.as_deref(), Some("198.51.100.4"));
        assert_eq!(ctx.user_agent.as_deref(), Some("app/1.0"));
    }

    #[test]
    fn falls_back_to_forwarded_for_then_peer() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Forwarded-For", HeaderValue::from_static(" 10.0.0.1 , 10.0.0.2"));
        let ctx = CallContext::from_request(&headers, &Extensions::new());
        assert_eq!(ctx.client_ip.as_deref(), Some("10.0.0.1"));

        let mut extensions = Extensions::new();
        extensions.insert(ConnectInfo(SocketAddr::from(([192, 0, 2, 9], 4242))));
        let ctx = CallContext::from_request(&HeaderMap::new(), &extensions);
        assert_eq!(ctx.client_ip.as_deref(), Some("192.0.2.9"));
        assert_eq!(ctx.user_agent, None);
    }
}

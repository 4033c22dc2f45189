use async_trait::async_trait;
use tonic::transport::Channel;
use tracing::debug;

use crate::{
    error::GatewayError,
    models::{auth::Token, user::AuthIdentity},
};

use super::{
    proto::auth::{
        LoginRequest, LogoutRequest, LogoutResponse, RefreshTokenRequest, TokenResponse,
        ValidateRequest, ValidateResponse, SERVICE,
    },
    role, CallContext, RpcChannel,
};

/// Token operations of the authentication authority.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn login(&self, ctx: &CallContext, email: &str, password: &str) -> Result<Token, GatewayError>;

    async fn refresh_token(&self, ctx: &CallContext, refresh_token: &str) -> Result<Token, GatewayError>;

    async fn logout(&self, ctx: &CallContext, access_token: &str) -> Result<(), GatewayError>;

    /// Returns only the partial identity bound to `access_token`.
    async fn validate(&self, ctx: &CallContext, access_token: &str) -> Result<AuthIdentity, GatewayError>;
}

pub struct GrpcAuthClient {
    rpc: RpcChannel,
}

impl GrpcAuthClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            rpc: RpcChannel::new(channel),
        }
    }
}

impl From<TokenResponse> for Token {
    fn from(t: TokenResponse) -> Self {
        Self {
            access_token: t.access_token,
            refresh_token: t.refresh_token,
        }
    }
}

#[async_trait]
impl AuthClient for GrpcAuthClient {
    async fn login(&self, ctx: &CallContext, email: &str, password: &str) -> Result<Token, GatewayError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.rpc
            .unary::<_, TokenResponse>(ctx, SERVICE, "Login", "/auth.AuthService/Login", request)
            .await
            .map(Token::from)
            .inspect_err(|e| debug!(error = %e, email, "Login rejected by authority"))
    }

    async fn refresh_token(&self, ctx: &CallContext, refresh_token: &str) -> Result<Token, GatewayError> {
        let request = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.rpc
            .unary::<_, TokenResponse>(
                ctx,
                SERVICE,
                "RefreshToken",
                "/auth.AuthService/RefreshToken",
                request,
            )
            .await
            .map(Token::from)
            .inspect_err(|e| debug!(error = %e, "RefreshToken rejected by authority"))
    }

    async fn logout(&self, ctx: &CallContext, access_token: &str) -> Result<(), GatewayError> {
        let request = LogoutRequest {
            access_token: access_token.to_string(),
        };
        self.rpc
            .unary::<_, LogoutResponse>(ctx, SERVICE, "Logout", "/auth.AuthService/Logout", request)
            .await
            .map(|_| ())
            .inspect_err(|e| debug!(error = %e, "Logout rejected by authority"))
    }

    async fn validate(&self, ctx: &CallContext, access_token: &str) -> Result<AuthIdentity, GatewayError> {
        let request = ValidateRequest {
            access_token: access_token.to_string(),
        };
        let resp = self
            .rpc
            .unary::<_, ValidateResponse>(ctx, SERVICE, "Validate", "/auth.AuthService/Validate", request)
            .await
            .inspect_err(|e| debug!(error = %e, "Validate rejected by authority"))?;

        Ok(AuthIdentity {
            user_id: resp.user_id,
            role: role::from_authority(resp.user_role),
        })
    }
}

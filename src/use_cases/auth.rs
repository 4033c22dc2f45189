use tracing::debug;

use crate::{
    error::GatewayError,
    models::{auth::Token, user::AuthIdentity},
    rpc::CallContext,
    services::auth::AuthService,
};

#[derive(Clone)]
pub struct AuthUseCase {
    service: AuthService,
}

impl AuthUseCase {
    pub fn new(service: AuthService) -> Self {
        Self { service }
    }

    pub async fn login(&self, ctx: &CallContext, email: &str, password: &str) -> Result<Token, GatewayError> {
        self.service
            .login(ctx, email, password)
            .await
            .inspect_err(|e| debug!(error = %e, email, "login failed"))
    }

    pub async fn refresh_token(&self, ctx: &CallContext, refresh_token: &str) -> Result<Token, GatewayError> {
        self.service
            .refresh_token(ctx, refresh_token)
            .await
            .inspect_err(|e| debug!(error = %e, "token refresh failed"))
    }

    pub async fn logout(&self, ctx: &CallContext, access_token: &str) -> Result<(), GatewayError> {
        self.service
            .logout(ctx, access_token)
            .await
            .inspect_err(|e| debug!(error = %e, "logout failed"))
    }

    /// Only `user_id` and `role` come back. Name and email need a user lookup.
    pub async fn validate(&self, ctx: &CallContext, access_token: &str) -> Result<AuthIdentity, GatewayError> {
        self.service
            .validate(ctx, access_token)
            .await
            .inspect_err(|e| debug!(error = %e, "access token rejected"))
    }
}

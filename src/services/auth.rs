use std::sync::Arc;

use crate::{
    error::GatewayError,
    models::{auth::Token, user::AuthIdentity},
    rpc::{AuthClient, CallContext},
};

/// Forwards token operations to the authority client.
#[derive(Clone)]
pub struct AuthService {
    client: Arc<dyn AuthClient>,
}

impl AuthService {
    pub fn new(client: Arc<dyn AuthClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, ctx: &CallContext, email: &str, password: &str) -> Result<Token, GatewayError> {
        self.client.login(ctx, email, password).await
    }

    pub async fn refresh_token(&self, ctx: &CallContext, refresh_token: &str) -> Result<Token, GatewayError> {
        self.client.refresh_token(ctx, refresh_token).await
    }

    pub async fn logout(&self, ctx: &CallContext, access_token: &str) -> Result<(), GatewayError> {
        self.client.logout(ctx, access_token).await
    }

    pub async fn validate(&self, ctx: &CallContext, access_token: &str) -> Result<AuthIdentity, GatewayError> {
        self.client.validate(ctx, access_token).await
    }
}

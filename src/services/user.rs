use std::sync::Arc;

use crate::{
    error::GatewayError,
    models::user::{NewUser, UserRecord, UserUpdate},
    rpc::{CallContext, UserClient},
};

/// Forwards user-record operations to the authority client.
#[derive(Clone)]
pub struct UserService {
    client: Arc<dyn UserClient>,
}

impl UserService {
    pub fn new(client: Arc<dyn UserClient>) -> Self {
        Self { client }
    }

    pub async fn check_create_user(&self, ctx: &CallContext, email: &str, name: &str) -> Result<(), GatewayError> {
        self.client.check_create_user(ctx, email, name).await
    }

    pub async fn get_user_by_email(&self, ctx: &CallContext, email: &str) -> Result<UserRecord, GatewayError> {
        self.client.get_user_by_email(ctx, email).await
    }

    pub async fn get_user_by_id(&self, ctx: &CallContext, id: &str) -> Result<UserRecord, GatewayError> {
        self.client.get_user_by_id(ctx, id).await
    }

    pub async fn create_user(&self, ctx: &CallContext, user: &NewUser) -> Result<(), GatewayError> {
        self.client.create_user(ctx, user).await
    }

    pub async fn update_user(&self, ctx: &CallContext, update: &UserUpdate) -> Result<UserRecord, GatewayError> {
        self.client.update_user(ctx, update).await
    }

    pub async fn delete_user(&self, ctx: &CallContext, id: &str, password: &str) -> Result<(), GatewayError> {
        self.client.delete_user(ctx, id, password).await
    }
}

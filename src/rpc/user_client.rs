use async_trait::async_trait;
use tonic::transport::Channel;
use tracing::{info, warn};

use crate::{
    error::GatewayError,
    models::user::{NewUser, UserRecord, UserUpdate},
};

use super::{
    proto::user::{
        CheckCreateUserRequest, CheckCreateUserResponse, CreateUserRequest, CreateUserResponse,
        DeleteUserRequest, DeleteUserResponse, GetUserInfoByEmailRequest,
        GetUserInfoByUserIdRequest, UpdateUserRequest, UserInfoResponse, SERVICE,
    },
    role, CallContext, RpcChannel,
};

/// Folds a `CheckCreateUser` outcome into a yes/no: a declined answer and a
/// failed call both reject the sign-up.
fn creation_verdict(
    result: Result<CheckCreateUserResponse, GatewayError>,
    email: &str,
    name: &str,
) -> Result<(), GatewayError> {
    match result {
        Ok(resp) if resp.ok => Ok(()),
        Ok(_) => {
            info!(email, name, "Authority declined account creation");
            Err(GatewayError::UserCreationRejected("account creation not allowed".into()))
        }
        Err(e) => {
            info!(error = %e, email, name, "CheckCreateUser failed");
            Err(GatewayError::UserCreationRejected(e.to_string()))
        }
    }
}

/// User-record operations of the authentication authority.
#[async_trait]
pub trait UserClient: Send + Sync {
    /// Asks whether an account with this email and name may be created.
    async fn check_create_user(&self, ctx: &CallContext, email: &str, name: &str) -> Result<(), GatewayError>;

    async fn get_user_by_email(&self, ctx: &CallContext, email: &str) -> Result<UserRecord, GatewayError>;

    async fn get_user_by_id(&self, ctx: &CallContext, id: &str) -> Result<UserRecord, GatewayError>;

    async fn create_user(&self, ctx: &CallContext, user: &NewUser) -> Result<(), GatewayError>;

    async fn update_user(&self, ctx: &CallContext, update: &UserUpdate) -> Result<UserRecord, GatewayError>;

    async fn delete_user(&self, ctx: &CallContext, id: &str, password: &str) -> Result<(), GatewayError>;
}

pub struct GrpcUserClient {
    rpc: RpcChannel,
}

impl GrpcUserClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            rpc: RpcChannel::new(channel),
        }
    }
}

impl From<UserInfoResponse> for UserRecord {
    fn from(u: UserInfoResponse) -> Self {
        Self {
            role: role::from_authority(u.role),
            id: u.user_id,
            name: u.name,
            email: u.email,
        }
    }
}

#[async_trait]
impl UserClient for GrpcUserClient {
    async fn check_create_user(&self, ctx: &CallContext, email: &str, name: &str) -> Result<(), GatewayError> {
        let request = CheckCreateUserRequest {
            email: email.to_string(),
            name: name.to_string(),
        };
        let result = self
            .rpc
            .unary::<_, CheckCreateUserResponse>(
                ctx,
                SERVICE,
                "CheckCreateUser",
                "/user.UserService/CheckCreateUser",
                request,
            )
            .await;

        creation_verdict(result, email, name)
    }

    async fn get_user_by_email(&self, ctx: &CallContext, email: &str) -> Result<UserRecord, GatewayError> {
        let request = GetUserInfoByEmailRequest {
            email: email.to_string(),
        };
        self.rpc
            .unary::<_, UserInfoResponse>(
                ctx,
                SERVICE,
                "GetUserInfoByEmail",
                "/user.UserService/GetUserInfoByEmail",
                request,
            )
            .await
            .map(UserRecord::from)
            .inspect_err(|e| info!(error = %e, email, "GetUserInfoByEmail failed"))
    }

    async fn get_user_by_id(&self, ctx: &CallContext, id: &str) -> Result<UserRecord, GatewayError> {
        let request = GetUserInfoByUserIdRequest {
            user_id: id.to_string(),
        };
        self.rpc
            .unary::<_, UserInfoResponse>(
                ctx,
                SERVICE,
                "GetUserInfoByUserID",
                "/user.UserService/GetUserInfoByUserID",
                request,
            )
            .await
            .map(UserRecord::from)
            .inspect_err(|e| info!(error = %e, id, "GetUserInfoByUserID failed"))
    }

    async fn create_user(&self, ctx: &CallContext, user: &NewUser) -> Result<(), GatewayError> {
        let request = CreateUserRequest {
            r#type: role::to_create_user_type(user.role) as i32,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        };
        self.rpc
            .unary::<_, CreateUserResponse>(
                ctx,
                SERVICE,
                "CreateUser",
                "/user.UserService/CreateUser",
                request,
            )
            .await
            .map(|_| ())
            .inspect_err(|e| {
                info!(error = %e, email = %user.email, name = %user.name, role = %user.role, "CreateUser failed")
            })
    }

    async fn update_user(&self, ctx: &CallContext, update: &UserUpdate) -> Result<UserRecord, GatewayError> {
        let request = UpdateUserRequest {
            user_id: update.user_id.clone(),
            name: update.name.clone(),
            password: update.password.clone(),
        };
        self.rpc
            .unary::<_, UserInfoResponse>(
                ctx,
                SERVICE,
                "UpdateUser",
                "/user.UserService/UpdateUser",
                request,
            )
            .await
            .map(UserRecord::from)
            .inspect_err(|e| info!(error = %e, id = %update.user_id, "UpdateUser failed"))
    }

    async fn delete_user(&self, ctx: &CallContext, id: &str, password: &str) -> Result<(), GatewayError> {
        let request = DeleteUserRequest {
            user_id: id.to_string(),
            password: password.to_string(),
        };
        self.rpc
            .unary::<_, DeleteUserResponse>(
                ctx,
                SERVICE,
                "DeleteUser",
                "/user.UserService/DeleteUser",
                request,
            )
            .await
            .map(|_| ())
            .inspect_err(|e| warn!(error = %e, id, "DeleteUser failed"))
    }
}

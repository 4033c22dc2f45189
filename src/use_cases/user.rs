use tracing::{debug, info};

use crate::{
    error::GatewayError,
    models::user::{AuthIdentity, NewUser, UserRecord, UserRole, UserUpdate},
    rpc::CallContext,
    services::user::UserService,
};

/// Sign-up input as received from an unauthenticated client.
#[derive(Debug, Clone)]
pub struct SignUp {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Clone)]
pub struct UserUseCase {
    service: UserService,
}

impl UserUseCase {
    pub fn new(service: UserService) -> Self {
        Self { service }
    }

    /// Asks the authority for permission, then creates the account.
    pub async fn create_user(&self, ctx: &CallContext, sign_up: SignUp) -> Result<(), GatewayError> {
        self.service
            .check_create_user(ctx, &sign_up.email, &sign_up.name)
            .await?;

        let user = NewUser {
            role: UserRole::from_sign_up(&sign_up.role),
            name: sign_up.name,
            email: sign_up.email,
            password: sign_up.password,
        };
        self.service.create_user(ctx, &user).await?;
        info!(email = %user.email, role = %user.role, "user created");
        Ok(())
    }

    pub async fn get_user_by_email(&self, ctx: &CallContext, email: &str) -> Result<UserRecord, GatewayError> {
        self.service.get_user_by_email(ctx, email).await
    }

    pub async fn get_user(&self, ctx: &CallContext, identity: &AuthIdentity) -> Result<UserRecord, GatewayError> {
        self.service.get_user_by_id(ctx, &identity.user_id).await
    }

    /// Updates the caller's own account. The target id comes from the
    /// validated identity, never from the request body.
    pub async fn update_user(
        &self,
        ctx: &CallContext,
        identity: &AuthIdentity,
        name: Option<String>,
        password: Option<String>,
    ) -> Result<UserRecord, GatewayError> {
        let update = UserUpdate {
            user_id: identity.user_id.clone(),
            name: name.unwrap_or_default(),
            password: password.unwrap_or_default(),
        };
        self.service.update_user(ctx, &update).await
    }

    pub async fn delete_user(
        &self,
        ctx: &CallContext,
        identity: &AuthIdentity,
        password: &str,
    ) -> Result<(), GatewayError> {
        self.service
            .delete_user(ctx, &identity.user_id, password)
            .await
            .inspect(|_| debug!(user_id = %identity.user_id, "user deleted"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::rpc::UserClient;

    #[derive(Default)]
    struct RecordingUserClient {
        allow_creation: bool,
        created: Mutex<Vec<NewUser>>,
        updated: Mutex<Vec<UserUpdate>>,
        deleted: Mutex<Vec<String>>,
    }

    fn record(id: &str) -> UserRecord {
        UserRecord {
            id: id.into(),
            name: "tester".into(),
            email: "tester@example.com".into(),
            role: UserRole::User,
        }
    }

    #[async_trait]
    impl UserClient for RecordingUserClient {
        async fn check_create_user(&self, _: &CallContext, _: &str, _: &str) -> Result<(), GatewayError> {
            if self.allow_creation {
                Ok(())
            } else {
                Err(GatewayError::UserCreationRejected("duplicate email".into()))
            }
        }

        async fn get_user_by_email(&self, _: &CallContext, _: &str) -> Result<UserRecord, GatewayError> {
            Ok(record("by-email"))
        }

        async fn get_user_by_id(&self, _: &CallContext, id: &str) -> Result<UserRecord, GatewayError> {
            Ok(record(id))
        }

        async fn create_user(&self, _: &CallContext, user: &NewUser) -> Result<(), GatewayError> {
            self.created.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn update_user(&self, _: &CallContext, update: &UserUpdate) -> Result<UserRecord, GatewayError> {
            self.updated.lock().unwrap().push(update.clone());
            Ok(record(&update.user_id))
        }

        async fn delete_user(&self, _: &CallContext, id: &str, _: &str) -> Result<(), GatewayError> {
            self.deleted.lock().unwrap().push(id.to_string());
            Ok(())
        }
    }

    fn use_case(client: Arc<RecordingUserClient>) -> UserUseCase {
        UserUseCase::new(UserService::new(client))
    }

    fn sign_up(role: &str) -> SignUp {
        SignUp {
            name: "tester".into(),
            email: "tester@example.com".into(),
            password: "password123".into(),
            role: role.into(),
        }
    }

    #[tokio::test]
    async fn sign_up_role_falls_back_to_user() {
        let client = Arc::new(RecordingUserClient {
            allow_creation: true,
            ..Default::default()
        });
        let uc = use_case(client.clone());
        let ctx = CallContext::default();

        uc.create_user(&ctx, sign_up("admin")).await.unwrap();
        uc.create_user(&ctx, sign_up("device")).await.unwrap();
        uc.create_user(&ctx, sign_up("superuser")).await.unwrap();

        let roles: Vec<UserRole> = client.created.lock().unwrap().iter().map(|u| u.role).collect();
        assert_eq!(roles, vec![UserRole::User, UserRole::Device, UserRole::User]);
    }

    #[tokio::test]
    async fn rejected_check_stops_creation() {
        let client = Arc::new(RecordingUserClient::default());
        let uc = use_case(client.clone());

        let err = uc
            .create_user(&CallContext::default(), sign_up("user"))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::UserCreationRejected(_)));
        assert!(client.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn mutations_target_the_validated_identity() {
        let client = Arc::new(RecordingUserClient::default());
        let uc = use_case(client.clone());
        let identity = AuthIdentity {
            user_id: "owner-id".into(),
            role: UserRole::User,
        };
        let ctx = CallContext::default();

        let updated = uc
            .update_user(&ctx, &identity, Some("renamed".into()), None)
            .await
            .unwrap();
        uc.delete_user(&ctx, &identity, "password123").await.unwrap();

        assert_eq!(updated.id, "owner-id");
        let update = client.updated.lock().unwrap()[0].clone();
        assert_eq!(update.user_id, "owner-id");
        assert_eq!(update.name, "renamed");
        assert_eq!(update.password, "");
        assert_eq!(*client.deleted.lock().unwrap(), vec!["owner-id".to_string()]);
    }

    #[tokio::test]
    async fn lookup_by_email_returns_full_record() {
        let uc = use_case(Arc::new(RecordingUserClient::default()));
        let user = uc
            .get_user_by_email(&CallContext::default(), "tester@example.com")
            .await
            .unwrap();
        assert_eq!(user.email, "tester@example.com");
        assert_eq!(user.name, "tester");
    }
}

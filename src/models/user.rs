use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    User,
    Device,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Device => "device",
        };
        write!(f, "{s}")
    }
}

impl UserRole {
    /// Role requested by an unauthenticated sign-up.
    /// Only `device` is honoured; anything else, `admin` included, becomes `user`.
    pub fn from_sign_up(role: &str) -> Self {
        match role {
            "device" => UserRole::Device,
            _ => UserRole::User,
        }
    }
}

/// Partial identity produced by token validation.
///
/// Carries exactly what is needed to authorize a request. Handlers that need
/// the user's name or email must look up a [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthIdentity {
    pub user_id: String,
    pub role: UserRole,
}

/// Full user record as held by the authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Account to be created by the authority.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Profile change for one account. Empty strings leave the field untouched.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub user_id: String,
    pub name: String,
    pub password: String,
}

// Request/Response DTOs
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub name: String,
    #[serde(default = "default_sign_up_role")]
    pub role: String,
    pub password: String,
}

fn default_sign_up_role() -> String {
    "user".into()
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<UserRecord> for UserProfile {
    fn from(u: UserRecord) -> Self {
        Self {
            name: u.name,
            email: u.email,
            role: u.role,
        }
    }
}

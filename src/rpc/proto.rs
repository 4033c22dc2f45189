//! Wire messages of the authority's `auth.AuthService` and `user.UserService`.
//!
//! Declared by hand with prost derives so the crate builds without `protoc`.
//! Field tags must stay in sync with the authority's `.proto` files.

pub mod auth {
    pub const SERVICE: &str = "auth.AuthService";

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct LoginRequest {
        #[prost(string, tag = "1")]
        pub email: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub password: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RefreshTokenRequest {
        #[prost(string, tag = "1")]
        pub refresh_token: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TokenResponse {
        #[prost(string, tag = "1")]
        pub access_token: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub refresh_token: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct LogoutRequest {
        #[prost(string, tag = "1")]
        pub access_token: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct LogoutResponse {}

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ValidateRequest {
        #[prost(string, tag = "1")]
        pub access_token: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ValidateResponse {
        #[prost(string, tag = "1")]
        pub user_id: ::prost::alloc::string::String,
        #[prost(enumeration = "super::AuthorityRole", tag = "2")]
        pub user_role: i32,
    }
}

pub mod user {
    pub const SERVICE: &str = "user.UserService";

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CheckCreateUserRequest {
        #[prost(string, tag = "1")]
        pub email: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub name: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CheckCreateUserResponse {
        #[prost(bool, tag = "1")]
        pub ok: bool,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GetUserInfoByEmailRequest {
        #[prost(string, tag = "1")]
        pub email: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GetUserInfoByUserIdRequest {
        #[prost(string, tag = "1")]
        pub user_id: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct UserInfoResponse {
        #[prost(string, tag = "1")]
        pub user_id: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub name: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub email: ::prost::alloc::string::String,
        #[prost(enumeration = "super::AuthorityRole", tag = "4")]
        pub role: i32,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CreateUserRequest {
        #[prost(enumeration = "CreateUserType", tag = "1")]
        pub r#type: i32,
        #[prost(string, tag = "2")]
        pub name: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub email: ::prost::alloc::string::String,
        #[prost(string, tag = "4")]
        pub password: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CreateUserResponse {}

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct UpdateUserRequest {
        #[prost(string, tag = "1")]
        pub user_id: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub name: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub password: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DeleteUserRequest {
        #[prost(string, tag = "1")]
        pub user_id: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub password: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DeleteUserResponse {}

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum CreateUserType {
        BasicUser = 0,
        DataUser = 1,
    }
}

/// Role enumeration shared by both services.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AuthorityRole {
    BasicUser = 0,
    DataUser = 1,
    Admin = 2,
}

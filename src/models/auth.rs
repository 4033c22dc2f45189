use serde::{Deserialize, Serialize};

/// Token pair minted by the authority. Never inspected by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInQuery {
    #[serde(rename = "type", default = "default_sign_in_type")]
    pub kind: String,
}

fn default_sign_in_type() -> String {
    "password".into()
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

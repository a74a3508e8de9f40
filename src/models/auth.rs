use serde::{Deserialize, Serialize};

/// Payload of the signed bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterArgs {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

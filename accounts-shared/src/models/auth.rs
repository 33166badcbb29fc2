use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UnverifiedClaims {
    pub sub: String,                   // Cognito User ID
    pub email: Option<String>,
    #[serde(rename = "cognito:username")]
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(alias = "newPassword")]
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthTokens {
    pub id_token: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i32,
}

/// What the identity provider answered to a password sign-in.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Authenticated(AuthTokens),
    NewPasswordRequired { session: String },
    Rejected,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id_token: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i32,
    pub role: Option<String>,
    pub user_id: Option<String>,
}

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static EMAIL_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok()
});

/// Loose shape check; the identity provider does the authoritative validation.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// Row of the `users` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    pub user_id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Account metadata persisted on creation. Carries no credential.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}

pub type UserAttributes = BTreeMap<String, String>;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user_attributes: UserAttributes,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub data: Vec<UserRecord>,
}

use std::fmt;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::database::errors::DatabaseError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Credential length {requested} is below the minimum of {minimum}")]
    InvalidLength { requested: usize, minimum: usize },

    #[error("No credential of length {length} met the password policy after {attempts} attempts")]
    AttemptsExhausted { attempts: usize, length: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set")]
    MissingEnv(String),

    #[error("Environment variable {key} is invalid: {reason}")]
    InvalidEnv { key: String, reason: String },
}

#[derive(Debug, Error)]
pub enum IdentityError {
    /// The provider rejected the call; the message is safe to show to the caller.
    #[error("{0}")]
    Service(String),

    #[error("Identity provider request failed: {0}")]
    Unexpected(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub enum AuthorizationError {
    MissingToken,
    InvalidToken(String),
}

impl fmt::Display for AuthorizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizationError::MissingToken => write!(f, "Missing authorization token"),
            AuthorizationError::InvalidToken(msg) => write!(f, "Invalid authorization token: {}", msg),
        }
    }
}

impl std::error::Error for AuthorizationError {}

/// Everything a handler can fail with, each variant owning its HTTP status.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Unauthorized(#[from] AuthorizationError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AccountError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::Forbidden(_) => StatusCode::FORBIDDEN,
            AccountError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AccountError::Identity(IdentityError::Service(_)) => StatusCode::BAD_REQUEST,
            AccountError::Identity(IdentityError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AccountError::Credential(_)
            | AccountError::Database(_)
            | AccountError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

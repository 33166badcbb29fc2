use std::fmt;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use crate::models::errors::ConfigError;

#[derive(Debug)]
pub enum DatabaseError {
    Config(String),
    SecretFetch(String),
    InvalidSecret(String),
    Connection(String),
    Query(String),
    DynamoDbOperation(String),
    Deserialization(String),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) =>
                DatabaseError::Connection(err.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) =>
                DatabaseError::Deserialization(err.to_string()),
            _ => DatabaseError::Query(err.to_string()),
        }
    }
}

impl From<ConfigError> for DatabaseError {
    fn from(err: ConfigError) -> Self {
        DatabaseError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        DatabaseError::InvalidSecret(format!("{:?}", err))
    }
}

impl From<SdkError<GetSecretValueError>> for DatabaseError {
    fn from(err: SdkError<GetSecretValueError>) -> Self {
        DatabaseError::SecretFetch(format!("Secrets Manager error: {}", err))
    }
}

impl From<SdkError<GetItemError>> for DatabaseError {
    fn from(err: SdkError<GetItemError>) -> Self {
        DatabaseError::DynamoDbOperation(format!("DynamoDB GetItem error: {}", err))
    }
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::Config(e) => write!(f, "Database configuration error: {}", e),
            DatabaseError::SecretFetch(e) => write!(f, "Failed to fetch database credentials: {}", e),
            DatabaseError::InvalidSecret(e) => write!(f, "Database credentials are malformed: {}", e),
            DatabaseError::Connection(e) => write!(f, "Failed to connect to the database: {}", e),
            DatabaseError::Query(e) => write!(f, "Database query failed: {}", e),
            DatabaseError::DynamoDbOperation(e) => write!(f, "DynamoDB operation failed: {}", e),
            DatabaseError::Deserialization(e) => write!(f, "Failed to read database row: {}", e),
        }
    }
}

impl std::error::Error for DatabaseError {}

use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use serde::Deserialize;
use crate::database::errors::DatabaseError;
use crate::utilities::config;

/// Shape of the RDS secret managed by Secrets Manager.
#[derive(Clone, Deserialize)]
pub struct DatabaseCredentials {
    pub username: String,
    pub password: String,
    pub host: Option<String>,
}

impl std::fmt::Debug for DatabaseCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .finish()
    }
}

pub async fn get_secrets_client() -> SecretsManagerClient {
    SecretsManagerClient::new(&config::load_aws_config().await)
}

pub fn parse_database_credentials(secret_string: &str) -> Result<DatabaseCredentials, DatabaseError> {
    Ok(serde_json::from_str(secret_string)?)
}

pub async fn get_database_credentials(
    client: &SecretsManagerClient,
    secret_name: &str,
) -> Result<DatabaseCredentials, DatabaseError> {
    let response = client
        .get_secret_value()
        .secret_id(secret_name)
        .send()
        .await?;

    let secret_string = response
        .secret_string()
        .ok_or_else(|| DatabaseError::InvalidSecret(format!("Secret {} has no string value", secret_name)))?;

    parse_database_credentials(secret_string)
}

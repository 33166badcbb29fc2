use aws_config::meta::region::RegionProviderChain;
use aws_config::{Region, SdkConfig};
use dotenv::dotenv;
use once_cell::sync::OnceCell;
use std::env;
use crate::models::errors::ConfigError;

pub const DEFAULT_USER_GROUP: &str = "usuario";
pub const DEFAULT_RDS_PORT: u16 = 3306;

static DOTENV: OnceCell<()> = OnceCell::new();

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    DOTENV.get_or_init(|| {
        if dotenv().is_ok() {
            log::info!("Loaded .env file");
        } else {
            log::info!("No .env file found, using process environment");
        }
    });
}

/// Fetch environment variables by key
pub fn get_env_var(key: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv(key.to_string())),
    }
}

fn get_optional_env_var(key: &str) -> Option<String> {
    get_env_var(key).ok()
}

/// Region override; `None` falls back to the AWS default provider chain.
pub fn get_region_name() -> Option<String> {
    get_optional_env_var("REGION_NAME")
}

/// Shared AWS SDK configuration honouring `REGION_NAME`.
pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(get_region_name().map(Region::new))
        .or_default_provider();
    aws_config::from_env().region(region_provider).load().await
}

pub fn get_user_pool_id() -> Result<String, ConfigError> {
    get_env_var("USER_POOL_ID")
}

pub fn get_user_pool_client_id() -> Result<String, ConfigError> {
    get_env_var("CLIENT_ID")
}

pub fn get_default_user_group() -> String {
    get_optional_env_var("DEFAULT_USER_GROUP").unwrap_or_else(|| DEFAULT_USER_GROUP.to_string())
}

pub fn get_user_profiles_table() -> Result<String, ConfigError> {
    get_env_var("USER_PROFILES_TABLE_NAME")
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub secret_name: String,
    pub endpoint: String,
    pub database: String,
    pub port: u16,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match get_optional_env_var("RDS_PORT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidEnv {
                key: "RDS_PORT".to_string(),
                reason: format!("{}", e),
            })?,
            None => DEFAULT_RDS_PORT,
        };

        Ok(Self {
            secret_name: get_env_var("RDS_SECRET_NAME")?,
            endpoint: get_env_var("RDS_ENDPOINT")?,
            database: get_env_var("RDS_DB_NAME")?,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_reported_by_name() {
        match get_env_var("ACCOUNTS_TEST_DEFINITELY_UNSET") {
            Err(ConfigError::MissingEnv(key)) => assert_eq!(key, "ACCOUNTS_TEST_DEFINITELY_UNSET"),
            other => panic!("expected MissingEnv, got {:?}", other),
        }
    }

    #[test]
    fn default_group_falls_back_to_usuario() {
        if env::var("DEFAULT_USER_GROUP").is_err() {
            assert_eq!(get_default_user_group(), DEFAULT_USER_GROUP);
        }
    }
}

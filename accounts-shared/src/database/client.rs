use aws_sdk_dynamodb::Client as DynamoDbClient;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use crate::services::secrets_services::DatabaseCredentials;
use crate::utilities::config::{self, DatabaseSettings};

/// One Lambda container serves one request at a time.
const MAX_CONNECTIONS: u32 = 1;

pub async fn get_dynamodb_client() -> DynamoDbClient {
    DynamoDbClient::new(&config::load_aws_config().await)
}

pub fn connect_options(settings: &DatabaseSettings, credentials: &DatabaseCredentials) -> MySqlConnectOptions {
    let host = credentials.host.as_deref().unwrap_or(&settings.endpoint);

    MySqlConnectOptions::new()
        .host(host)
        .port(settings.port)
        .username(&credentials.username)
        .password(&credentials.password)
        .database(&settings.database)
}

/// Builds the pool without opening a connection; the first query connects.
pub fn create_mysql_pool(settings: &DatabaseSettings, credentials: &DatabaseCredentials) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_lazy_with(connect_options(settings, credentials))
}

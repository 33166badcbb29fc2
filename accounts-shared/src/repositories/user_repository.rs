use async_trait::async_trait;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use sqlx::mysql::MySqlPool;
use tokio::sync::OnceCell;
use crate::database::client::create_mysql_pool;
use crate::database::errors::DatabaseError;
use crate::models::user::{NewUser, UserRecord, UserUpdate};
use crate::services::secrets_services::{get_database_credentials, get_secrets_client};
use crate::utilities::config::DatabaseSettings;

/// Interface
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert_user(&self, user: &NewUser) -> Result<(), DatabaseError>;

    async fn find_user(&self, user_id: i64) -> Result<Vec<UserRecord>, DatabaseError>;

    /// Absent fields keep their stored value. Returns the matched row count.
    async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<u64, DatabaseError>;

    /// Returns the number of deleted rows.
    async fn delete_user(&self, user_id: i64) -> Result<u64, DatabaseError>;
}

/// MySQL (RDS) implementation. Credentials come from Secrets Manager the
/// first time a query runs and the pool is then reused by the container.
pub struct MySqlUserRepository {
    secrets: SecretsManagerClient,
    settings: DatabaseSettings,
    pool: OnceCell<MySqlPool>,
}

impl MySqlUserRepository {
    pub fn new(secrets: SecretsManagerClient, settings: DatabaseSettings) -> Self {
        Self { secrets, settings, pool: OnceCell::new() }
    }

    pub async fn from_env() -> Result<Self, DatabaseError> {
        let settings = DatabaseSettings::from_env()?;
        Ok(Self::new(get_secrets_client().await, settings))
    }

    async fn pool(&self) -> Result<&MySqlPool, DatabaseError> {
        self.pool
            .get_or_try_init(|| async {
                let credentials = get_database_credentials(&self.secrets, &self.settings.secret_name).await?;
                log::info!("Opening MySQL pool for {}", self.settings.database);
                Ok::<_, DatabaseError>(create_mysql_pool(&self.settings, &credentials))
            })
            .await
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn insert_user(&self, user: &NewUser) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO users (username, email, role) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.role)
            .execute(self.pool().await?)
            .await?;

        Ok(())
    }

    async fn find_user(&self, user_id: i64) -> Result<Vec<UserRecord>, DatabaseError> {
        let rows = sqlx::query_as::<_, UserRecord>(
            "SELECT user_id, username, email, role FROM users WHERE user_id = ?",
        )
            .bind(user_id)
            .fetch_all(self.pool().await?)
            .await?;

        Ok(rows)
    }

    async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE users SET username = COALESCE(?, username), email = COALESCE(?, email) WHERE user_id = ?",
        )
            .bind(update.username.as_deref())
            .bind(update.email.as_deref())
            .bind(user_id)
            .execute(self.pool().await?)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_user(&self, user_id: i64) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = ?")
            .bind(user_id)
            .execute(self.pool().await?)
            .await?;

        Ok(result.rows_affected())
    }
}

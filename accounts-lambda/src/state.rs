use std::sync::Arc;
use accounts_shared::database::client::get_dynamodb_client;
use accounts_shared::models::errors::AccountError;
use accounts_shared::repositories::profile_repository::{DynamoProfileRepository, ProfileRepository};
use accounts_shared::repositories::user_repository::{MySqlUserRepository, UserRepository};
use accounts_shared::services::cognito_services::{CognitoIdentityProvider, IdentityProvider};
use accounts_shared::utilities::config;

/// Collaborators shared by every request a container serves.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub users: Arc<dyn UserRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub default_group: String,
}

impl AppState {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            identity,
            users,
            profiles,
            default_group: config::DEFAULT_USER_GROUP.to_string(),
        }
    }

    pub fn with_default_group(mut self, group: impl Into<String>) -> Self {
        self.default_group = group.into();
        self
    }

    /// Wires the AWS-backed implementations from the environment.
    pub async fn from_env() -> Result<Self, AccountError> {
        let identity = CognitoIdentityProvider::from_env().await?;
        let users = MySqlUserRepository::from_env().await?;
        let profiles = DynamoProfileRepository::new(
            get_dynamodb_client().await,
            config::get_user_profiles_table()?,
        );

        Ok(Self::new(Arc::new(identity), Arc::new(users), Arc::new(profiles))
            .with_default_group(config::get_default_user_group()))
    }
}

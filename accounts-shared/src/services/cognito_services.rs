use std::fmt::Debug;
use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_cognitoidentityprovider::types::{
    AttributeType, AuthFlowType, AuthenticationResultType, ChallengeNameType,
};
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use crate::models::auth::{AuthOutcome, AuthTokens};
use crate::models::errors::{ConfigError, IdentityError};
use crate::models::user::UserAttributes;
use crate::utilities::{config, fields::cognito};

/// Managed identity provider operations the handlers depend on.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn user_exists(&self, username: &str) -> Result<bool, IdentityError>;

    /// Creates the user with an unverified email; the provider mails out
    /// `temporary_password`.
    async fn create_user(&self, username: &str, email: &str, temporary_password: &str) -> Result<(), IdentityError>;

    /// Removes the user from the pool. Used to undo a half-finished signup.
    async fn delete_user(&self, username: &str) -> Result<(), IdentityError>;

    /// Creates `group` unless it already exists.
    async fn ensure_group(&self, group: &str) -> Result<(), IdentityError>;

    async fn add_user_to_group(&self, username: &str, group: &str) -> Result<(), IdentityError>;

    async fn get_user_attributes(&self, username: &str) -> Result<UserAttributes, IdentityError>;

    async fn list_groups_for_user(&self, username: &str) -> Result<Vec<String>, IdentityError>;

    async fn initiate_password_auth(&self, username: &str, password: &str) -> Result<AuthOutcome, IdentityError>;

    async fn respond_to_new_password_challenge(
        &self,
        username: &str,
        new_password: &str,
        session: &str,
    ) -> Result<AuthOutcome, IdentityError>;
}

pub async fn get_cognito_client() -> CognitoClient {
    CognitoClient::new(&config::load_aws_config().await)
}

fn provider_error<E>(err: SdkError<E>) -> IdentityError
where
    E: ProvideErrorMetadata + Debug,
{
    match &err {
        SdkError::ServiceError(service) => IdentityError::Service(
            service.err().message().unwrap_or("Identity provider rejected the request").to_string(),
        ),
        _ => IdentityError::Unexpected(format!("{:?}", err)),
    }
}

fn tokens_from(result: AuthenticationResultType) -> AuthTokens {
    AuthTokens {
        id_token: result.id_token.unwrap_or_default(),
        access_token: result.access_token.unwrap_or_default(),
        refresh_token: result.refresh_token.unwrap_or_default(),
        expires_in: result.expires_in,
    }
}

fn auth_outcome(
    challenge: Option<ChallengeNameType>,
    session: Option<String>,
    result: Option<AuthenticationResultType>,
) -> AuthOutcome {
    match (challenge, result) {
        (Some(ChallengeNameType::NewPasswordRequired), _) => AuthOutcome::NewPasswordRequired {
            session: session.unwrap_or_default(),
        },
        (_, Some(result)) => AuthOutcome::Authenticated(tokens_from(result)),
        _ => AuthOutcome::Rejected,
    }
}

/// Cognito user pool backed implementation.
pub struct CognitoIdentityProvider {
    client: CognitoClient,
    user_pool_id: String,
    client_id: String,
}

impl CognitoIdentityProvider {
    pub fn new(client: CognitoClient, user_pool_id: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            client,
            user_pool_id: user_pool_id.into(),
            client_id: client_id.into(),
        }
    }

    pub async fn from_env() -> Result<Self, ConfigError> {
        let user_pool_id = config::get_user_pool_id()?;
        let client_id = config::get_user_pool_client_id()?;
        Ok(Self::new(get_cognito_client().await, user_pool_id, client_id))
    }
}

#[async_trait]
impl IdentityProvider for CognitoIdentityProvider {
    async fn user_exists(&self, username: &str) -> Result<bool, IdentityError> {
        match self.client
            .admin_get_user()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) if err.as_service_error().is_some_and(|e| e.is_user_not_found_exception()) => Ok(false),
            Err(err) => Err(provider_error(err)),
        }
    }

    async fn create_user(&self, username: &str, email: &str, temporary_password: &str) -> Result<(), IdentityError> {
        let attributes = [
            (cognito::EMAIL_FIELD, email),
            (cognito::EMAIL_VERIFIED_FIELD, "false"),
        ]
            .into_iter()
            .map(|(name, value)| {
                AttributeType::builder()
                    .name(name)
                    .value(value)
                    .build()
                    .map_err(|e| IdentityError::Unexpected(format!("Failed to build attribute: {}", e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.client
            .admin_create_user()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .set_user_attributes(Some(attributes))
            .temporary_password(temporary_password)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(())
    }

    async fn delete_user(&self, username: &str) -> Result<(), IdentityError> {
        self.client
            .admin_delete_user()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(())
    }

    async fn ensure_group(&self, group: &str) -> Result<(), IdentityError> {
        let lookup = self.client
            .get_group()
            .group_name(group)
            .user_pool_id(&self.user_pool_id)
            .send()
            .await;

        match lookup {
            Ok(_) => Ok(()),
            Err(err) if err.as_service_error().is_some_and(|e| e.is_resource_not_found_exception()) => {
                log::info!("Group {} does not exist. Creating...", group);
                self.client
                    .create_group()
                    .group_name(group)
                    .user_pool_id(&self.user_pool_id)
                    .send()
                    .await
                    .map_err(provider_error)?;
                Ok(())
            }
            Err(err) => Err(provider_error(err)),
        }
    }

    async fn add_user_to_group(&self, username: &str, group: &str) -> Result<(), IdentityError> {
        self.client
            .admin_add_user_to_group()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .group_name(group)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(())
    }

    async fn get_user_attributes(&self, username: &str) -> Result<UserAttributes, IdentityError> {
        let response = self.client
            .admin_get_user()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(response.user_attributes
            .unwrap_or_default()
            .into_iter()
            .map(|attr| (attr.name, attr.value.unwrap_or_default()))
            .collect())
    }

    async fn list_groups_for_user(&self, username: &str) -> Result<Vec<String>, IdentityError> {
        let response = self.client
            .admin_list_groups_for_user()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(response.groups
            .unwrap_or_default()
            .into_iter()
            .filter_map(|group| group.group_name)
            .collect())
    }

    async fn initiate_password_auth(&self, username: &str, password: &str) -> Result<AuthOutcome, IdentityError> {
        let response = self.client
            .initiate_auth()
            .client_id(&self.client_id)
            .auth_flow(AuthFlowType::UserPasswordAuth)
            .auth_parameters("USERNAME", username)
            .auth_parameters("PASSWORD", password)
            .send()
            .await
            .map_err(provider_error)?;

        log::info!("Cognito answered sign-in with challenge {:?}", response.challenge_name);
        Ok(auth_outcome(response.challenge_name, response.session, response.authentication_result))
    }

    async fn respond_to_new_password_challenge(
        &self,
        username: &str,
        new_password: &str,
        session: &str,
    ) -> Result<AuthOutcome, IdentityError> {
        let response = self.client
            .respond_to_auth_challenge()
            .client_id(&self.client_id)
            .challenge_name(ChallengeNameType::NewPasswordRequired)
            .session(session)
            .challenge_responses("USERNAME", username)
            .challenge_responses("NEW_PASSWORD", new_password)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(auth_outcome(response.challenge_name, response.session, response.authentication_result))
    }
}

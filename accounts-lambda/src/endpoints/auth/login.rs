use http::Response;
use lambda_http::Body;
use serde_json::Value;
use accounts_shared::models::auth::{AuthOutcome, AuthTokens, LoginRequest, LoginResponse};
use accounts_shared::models::errors::AccountError;
use accounts_shared::utilities::fields::cognito;
use accounts_shared::utilities::logging::log_info;
use accounts_shared::utilities::responses::{account_error_response, success_response};
use crate::state::AppState;

pub async fn handler(state: &AppState, body: Value) -> Result<Response<Body>, lambda_http::Error> {
    let request: LoginRequest = serde_json::from_value(body).unwrap_or_default();

    match login(state, request).await {
        Ok(response) => success_response(response),
        Err(err) => account_error_response(&err),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

async fn login(state: &AppState, request: LoginRequest) -> Result<LoginResponse, AccountError> {
    let (username, password) = match (non_empty(request.username), non_empty(request.password)) {
        (Some(username), Some(password)) => (username, password),
        _ => return Err(AccountError::BadRequest("Username and password are required".to_string())),
    };

    log_info("login", &format!("Sign-in attempt for {}", username));

    let tokens = match state.identity.initiate_password_auth(&username, &password).await? {
        AuthOutcome::Authenticated(tokens) => tokens,
        AuthOutcome::NewPasswordRequired { session } => {
            let new_password = non_empty(request.new_password).ok_or_else(|| {
                AccountError::BadRequest("New password is required to complete the challenge".to_string())
            })?;

            match state.identity
                .respond_to_new_password_challenge(&username, &new_password, &session)
                .await?
            {
                AuthOutcome::Authenticated(tokens) => tokens,
                _ => return Err(AccountError::BadRequest("Authentication failed after new password".to_string())),
            }
        }
        AuthOutcome::Rejected => return Err(AccountError::BadRequest("Authentication failed".to_string())),
    };

    login_response(state, &username, tokens).await
}

async fn login_response(state: &AppState, username: &str, tokens: AuthTokens) -> Result<LoginResponse, AccountError> {
    let mut attributes = state.identity.get_user_attributes(username).await?;

    Ok(LoginResponse {
        id_token: tokens.id_token,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_in: tokens.expires_in,
        role: attributes.remove(cognito::ROLE_FIELD),
        user_id: attributes.remove(cognito::SUB_FIELD),
    })
}

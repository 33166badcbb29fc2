use http::{Response, StatusCode};
use lambda_http::Body;
use serde_json::Value;
use accounts_shared::models::errors::{AccountError, CredentialError};
use accounts_shared::models::user::{is_valid_email, NewUser};
use accounts_shared::utilities::fields::request;
use accounts_shared::utilities::logging::{log_error, log_info};
use accounts_shared::utilities::requests::string_field;
use accounts_shared::utilities::responses::{account_error_response, response_with_code, success_response, MessageBody};
use accounts_shared::utilities::security::generate_temporary_password;
use crate::state::AppState;

pub async fn handler(state: &AppState, body: Value) -> Result<Response<Body>, lambda_http::Error> {
    match string_field(&body, request::EMAIL) {
        Some(email) => match create_user(state, email).await {
            Ok(response) => success_response(response),
            Err(err) => account_error_response(&err),
        },
        None => response_with_code(MessageBody::new("Missing input parameters"), StatusCode::BAD_REQUEST),
    }
}

/// Provisions the account in the user pool, then records it in the users table.
/// The email doubles as the username.
async fn create_user(state: &AppState, email: &str) -> Result<MessageBody, AccountError> {
    if !is_valid_email(email) {
        return Err(AccountError::BadRequest("Invalid email address".to_string()));
    }
    let username = email;
    let role = state.default_group.as_str();

    if state.identity.user_exists(username).await? {
        return Err(AccountError::BadRequest("User account already exists".to_string()));
    }

    let temporary_password = generate_temporary_password().map_err(|err: CredentialError| {
        log_error("create_user", &err.to_string());
        err
    })?;

    state.identity
        .create_user(username, email, temporary_password.as_str())
        .await?;
    log_info("create_user", &format!("Created {} in the user pool", username));

    if let Err(err) = finish_provisioning(state, username, email, role).await {
        // No pool account may outlive a failed signup.
        if let Err(rollback) = state.identity.delete_user(username).await {
            log_error("create_user", &format!("Rollback of {} failed: {}", username, rollback));
        }
        return Err(err);
    }

    Ok(MessageBody::new("User created successfully, verification email sent."))
}

async fn finish_provisioning(state: &AppState, username: &str, email: &str, role: &str) -> Result<(), AccountError> {
    state.identity.ensure_group(role).await?;
    state.identity.add_user_to_group(username, role).await?;

    state.users
        .insert_user(&NewUser {
            username: username.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        })
        .await?;

    Ok(())
}

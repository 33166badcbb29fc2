use http::Response;
use lambda_http::Body;
use serde_json::Value;
use accounts_shared::models::errors::AccountError;
use accounts_shared::models::user::ProfileResponse;
use accounts_shared::utilities::fields::request;
use accounts_shared::utilities::requests::string_field;
use accounts_shared::utilities::responses::{account_error_response, error_response, success_response};
use crate::state::AppState;

pub async fn handler(state: &AppState, body: Value) -> Result<Response<Body>, lambda_http::Error> {
    match string_field(&body, request::USERNAME) {
        Some(username) => match user_profile(state, username).await {
            Ok(response) => success_response(response),
            Err(err) => account_error_response(&err),
        },
        None => error_response("Username is required"),
    }
}

async fn user_profile(state: &AppState, username: &str) -> Result<ProfileResponse, AccountError> {
    let user_attributes = state.identity.get_user_attributes(username).await?;

    Ok(ProfileResponse {
        message: "Profile User access successful".to_string(),
        user_attributes,
    })
}

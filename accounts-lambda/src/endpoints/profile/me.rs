use http::{Response, StatusCode};
use lambda_http::{Body, Request};
use serde_json::Value;
use accounts_shared::models::errors::{AccountError, AuthorizationError};
use accounts_shared::utilities::requests::extract_bearer_token;
use accounts_shared::utilities::responses::{cors_response_with_code, ErrorBody};
use accounts_shared::utilities::token_decoding::decode_unverified_claims;
use crate::state::AppState;

pub async fn handler(state: &AppState, event: &Request) -> Result<Response<Body>, lambda_http::Error> {
    match own_profile(state, extract_bearer_token(event)).await {
        Ok(profile) => cors_response_with_code(profile, StatusCode::OK),
        Err(err) => {
            let code = err.status_code();
            if code.is_server_error() {
                log::error!("Profile lookup failed: {:?}", err);
            }
            cors_response_with_code(ErrorBody { error_message: err.to_string() }, code)
        }
    }
}

async fn own_profile(state: &AppState, token: Option<&str>) -> Result<Value, AccountError> {
    let token = token.ok_or(AuthorizationError::MissingToken)?;
    let claims = decode_unverified_claims(token)?;

    state.profiles
        .get_profile(&claims.sub)
        .await?
        .ok_or_else(|| AccountError::NotFound("User profile not found".to_string()))
}

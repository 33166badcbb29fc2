use http::{Response, StatusCode};
use lambda_http::Body;
use serde_json::Value;
use accounts_shared::models::user::{is_valid_email, UserUpdate};
use accounts_shared::utilities::fields::request;
use accounts_shared::utilities::logging::log_error;
use accounts_shared::utilities::requests::string_field;
use accounts_shared::utilities::responses::{error_response, error_with_code, success_response};
use crate::state::AppState;

pub async fn handler(state: &AppState, user_id: Option<i64>, body: Value) -> Result<Response<Body>, lambda_http::Error> {
    let Some(user_id) = user_id else {
        return error_response("User ID is required.");
    };

    let update = UserUpdate {
        username: string_field(&body, request::USERNAME).map(str::to_string),
        email: string_field(&body, request::EMAIL).map(str::to_string),
    };
    if update.is_empty() {
        return error_response("Username or email is required");
    }
    if update.email.as_deref().is_some_and(|email| !is_valid_email(email)) {
        return error_response("Invalid email address");
    }

    match state.users.update_user(user_id, &update).await {
        Ok(0) => error_with_code("User not found", StatusCode::NOT_FOUND),
        Ok(_) => success_response("User updated successfully"),
        Err(err) => {
            log_error("update_user", &err.to_string());
            error_with_code("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

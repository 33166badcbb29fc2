use http::{Response, StatusCode};
use lambda_http::Body;
use accounts_shared::utilities::logging::log_error;
use accounts_shared::utilities::responses::{error_response, error_with_code, success_response};
use crate::state::AppState;

pub async fn handler(state: &AppState, user_id: Option<i64>) -> Result<Response<Body>, lambda_http::Error> {
    let Some(user_id) = user_id else {
        return error_response("User ID is required.");
    };

    match state.users.delete_user(user_id).await {
        Ok(0) => error_with_code("User not found", StatusCode::NOT_FOUND),
        Ok(_) => success_response("User deleted successfully"),
        Err(err) => {
            log_error("delete_user", &err.to_string());
            error_with_code("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

use http::{Response, StatusCode};
use lambda_http::Body;
use accounts_shared::models::user::UserListResponse;
use accounts_shared::utilities::logging::log_error;
use accounts_shared::utilities::responses::{error_with_code, response_with_code, success_response, MessageBody};
use crate::state::AppState;

pub async fn handler(state: &AppState, user_id: Option<i64>) -> Result<Response<Body>, lambda_http::Error> {
    let Some(user_id) = user_id else {
        return response_with_code(MessageBody::new("User ID is required."), StatusCode::BAD_REQUEST);
    };

    match state.users.find_user(user_id).await {
        Ok(rows) if rows.is_empty() => response_with_code(MessageBody::new("No results found."), StatusCode::NO_CONTENT),
        Ok(rows) => {
            log::info!("Found {} row(s) for user {}", rows.len(), user_id);
            success_response(UserListResponse { data: rows })
        }
        Err(err) => {
            log_error("get_user", &err.to_string());
            error_with_code("An error occurred while processing the request.", StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

use http::StatusCode;
use lambda_http::{Body, Request, Response};
use lambda_http::RequestExt;
use serde_json::json;
use crate::endpoints::{auth, profile, status, users};
use crate::state::AppState;
use accounts_shared::utilities::responses::{cors_response_with_code, error_with_code, success_response};
use accounts_shared::utilities::requests::extract_body;

const GET: &str = "GET";
const POST: &str = "POST";
const PUT: &str = "PUT";
const DELETE: &str = "DELETE";
const OPTIONS: &str = "OPTIONS";

fn strip_stage(raw_path: &str) -> &str {
    raw_path.strip_prefix("/dev")
        .or_else(|| raw_path.strip_prefix("/prod"))
        .filter(|path| path.starts_with('/'))
        .unwrap_or(raw_path)
}

pub async fn handle_lambda(state: &AppState, event: Request) -> Result<Response<Body>, lambda_http::Error> {
    let raw_path = event.raw_http_path().to_string();
    let raw_path = if raw_path.is_empty() { event.uri().path().to_string() } else { raw_path };
    let path = strip_stage(&raw_path).trim_end_matches('/').to_string();
    let method = event.method().as_str().to_string();

    log::info!("Received {} request for path: {}", method, path);
    let event_body = extract_body(&event);

    match (method.as_str(), path.as_str()) {
        //Monitor
        (GET, "/status") => success_response(status::handle().await),

        //Preflight
        (OPTIONS, _) => cors_response_with_code(json!({}), StatusCode::OK),

        //Users
        (POST, "/users") => users::create::handler(state, event_body).await,
        (GET, p) if p.starts_with("/users/") => users::get::handler(state, users::path_id(p)).await,
        (PUT, p) if p.starts_with("/users/") => users::update::handler(state, users::path_id(p), event_body).await,
        (DELETE, p) if p.starts_with("/users/") => users::delete::handler(state, users::path_id(p)).await,

        //Auth
        (POST, "/auth/login") => auth::login::handler(state, event_body).await,

        //Profiles
        (POST, "/profile/user") => profile::user::handler(state, event_body).await,
        (POST, "/profile/admin") => profile::admin::handler(state, event_body).await,
        (GET, "/profile/me") => profile::me::handler(state, &event).await,

        //Not found
        _ => error_with_code("Not Found", StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_prefix_is_removed() {
        assert_eq!(strip_stage("/dev/users"), "/users");
        assert_eq!(strip_stage("/prod/auth/login"), "/auth/login");
        assert_eq!(strip_stage("/users/7"), "/users/7");
        assert_eq!(strip_stage("/developers"), "/developers");
    }
}

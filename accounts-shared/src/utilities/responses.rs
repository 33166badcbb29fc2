use http::StatusCode;
use lambda_http::{Response, Body};
use serde::Serialize;
use crate::models::errors::AccountError;

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type,Authorization";
pub const CORS_ALLOW_METHODS: &str = "OPTIONS,POST,GET,PUT,DELETE";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error_message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

pub fn success_response<T: Serialize>(data: T) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(data, StatusCode::OK)
}

pub fn error_response(message: impl Into<String>) -> Result<Response<Body>, lambda_http::Error> {
    error_with_code(message, StatusCode::BAD_REQUEST)
}

pub fn error_with_code(message: impl Into<String>, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(ErrorBody { error_message: message.into() }, code)
}

/// Maps a handler failure onto its status code and an `error_message` body.
pub fn account_error_response(err: &AccountError) -> Result<Response<Body>, lambda_http::Error> {
    let code = err.status_code();
    if code.is_server_error() {
        log::error!("Request failed: {:?}", err);
    }
    error_with_code(err.to_string(), code)
}

pub fn response_with_code<T: Serialize>(data: T, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    build_response(data, code, false)
}

/// Same as [`response_with_code`] with the browser CORS headers attached.
pub fn cors_response_with_code<T: Serialize>(data: T, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    build_response(data, code, true)
}

fn build_response<T: Serialize>(data: T, code: StatusCode, cors: bool) -> Result<Response<Body>, lambda_http::Error> {
    let body = serde_json::to_string(&data).map_err(|_| lambda_http::Error::from("Serialization error"))?;
    // Status only: bodies carry tokens and profile data.
    log::info!("Response Code:{}", code);

    let mut builder = Response::builder()
        .status(code)
        .header("Content-Type", "application/json");

    if cors {
        builder = builder
            .header("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN)
            .header("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS)
            .header("Access-Control-Allow-Methods", CORS_ALLOW_METHODS);
    }

    builder
        .body(Body::Text(body))
        .map_err(|e| {
            log::error!("Failed to build response: {:?}", e);
            lambda_http::Error::from("Failed to construct HTTP response")
        })
}

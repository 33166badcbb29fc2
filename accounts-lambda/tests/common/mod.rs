#![allow(dead_code)]

use std::sync::Arc;
use http::Method;
use lambda_http::{Body, Request, RequestExt, Response};
use serde_json::Value;
use accounts_lambda::router::handle_lambda;
use accounts_lambda::state::AppState;
use accounts_shared::utilities::test::{InMemoryIdentityProvider, InMemoryProfileRepository, InMemoryUserRepository};

pub struct Harness {
    pub identity: Arc<InMemoryIdentityProvider>,
    pub users: Arc<InMemoryUserRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
    pub state: AppState,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(InMemoryIdentityProvider::new(), InMemoryProfileRepository::new())
    }

    pub fn with(identity: InMemoryIdentityProvider, profiles: InMemoryProfileRepository) -> Self {
        let identity = Arc::new(identity);
        let users = Arc::new(InMemoryUserRepository::new());
        let profiles = Arc::new(profiles);
        let state = AppState::new(identity.clone(), users.clone(), profiles.clone());
        Self { identity, users, profiles, state }
    }

    pub async fn send(&self, request: Request) -> Response<Body> {
        handle_lambda(&self.state, request).await.unwrap()
    }
}

pub fn request(method: Method, path: &str, body: Option<Value>, token: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let body = body.map(|b| Body::Text(b.to_string())).unwrap_or(Body::Empty);

    Request::from(builder.body(body).unwrap()).with_raw_http_path(path)
}

pub fn body_json(response: &Response<Body>) -> Value {
    match response.body() {
        Body::Text(body) => serde_json::from_str(body).unwrap(),
        _ => panic!("Response body is not text"),
    }
}

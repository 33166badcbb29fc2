mod common;

use std::sync::Mutex;
use http::Method;
use jsonwebtoken::{encode, EncodingKey, Header};
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use accounts_shared::utilities::test::{InMemoryIdentityProvider, InMemoryProfileRepository};
use common::{request, Harness};

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        CAPTURED.lock().unwrap_or_else(|e| e.into_inner()).push(record.args().to_string());
    }

    fn flush(&self) {}
}

fn captured() -> String {
    CAPTURED.lock().unwrap_or_else(|e| e.into_inner()).join("\n")
}

// Single test in this binary: the logger is process-global.
#[tokio::test]
async fn test_secrets_never_reach_the_log() {
    log::set_boxed_logger(Box::new(CaptureLogger)).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let identity = InMemoryIdentityProvider::new().with_user(
        "u",
        "Sup3r$ecretPw",
        &[("custom:role", "user"), ("sub", "sub-u")],
        &[],
    );
    let profiles = InMemoryProfileRepository::new()
        .with_profile("sub-u", json!({"user_id": "sub-u", "national_id": "X-4471-PRIVATE"}));
    let harness = Harness::with(identity, profiles);

    let response = harness
        .send(request(Method::POST, "/auth/login", Some(json!({"username": "u", "password": "Sup3r$ecretPw"})), None))
        .await;
    assert_eq!(response.status(), 200);

    let token = encode(&Header::default(), &json!({"sub": "sub-u"}), &EncodingKey::from_secret(b"test")).unwrap();
    let response = harness.send(request(Method::GET, "/profile/me", None, Some(&token))).await;
    assert_eq!(response.status(), 200);

    let response = harness
        .send(request(Method::POST, "/users", Some(json!({"email": "new@example.com"})), None))
        .await;
    assert_eq!(response.status(), 200);
    let temporary_password = harness.identity.password_of("new@example.com").unwrap();

    let output = captured();
    assert!(output.contains("Response Code:200 OK"), "responses are still logged: {}", output);
    for secret in [
        "id-token-u",
        "access-token-u",
        "refresh-token-u",
        "Sup3r$ecretPw",
        "X-4471-PRIVATE",
        token.as_str(),
        temporary_password.as_str(),
    ] {
        assert!(!output.contains(secret), "{} written to the log", secret);
    }
}

mod common;

use http::Method;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use accounts_shared::utilities::test::{InMemoryIdentityProvider, InMemoryProfileRepository};
use common::{body_json, request, Harness};

fn harness() -> Harness {
    let identity = InMemoryIdentityProvider::new()
        .with_user("boss", "pw", &[("email", "boss@example.com"), ("sub", "sub-boss")], &["admin"])
        .with_user("worker", "pw", &[("email", "worker@example.com"), ("sub", "sub-worker")], &["usuario"]);
    let profiles = InMemoryProfileRepository::new()
        .with_profile("sub-worker", json!({"user_id": "sub-worker", "display_name": "Worker", "age": 30}));
    Harness::with(identity, profiles)
}

fn token_for(sub: &str) -> String {
    encode(&Header::default(), &json!({"sub": sub}), &EncodingKey::from_secret(b"test")).unwrap()
}

#[tokio::test]
async fn test_user_profile_returns_attributes() {
    let harness = harness();
    let response = harness
        .send(request(Method::POST, "/profile/user", Some(json!({"username": "worker"})), None))
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(body_json(&response), json!({
        "message": "Profile User access successful",
        "user_attributes": {"email": "worker@example.com", "sub": "sub-worker"},
    }));
}

#[tokio::test]
async fn test_user_profile_requires_username() {
    let harness = harness();
    let response = harness.send(request(Method::POST, "/profile/user", Some(json!({})), None)).await;

    assert_eq!(response.status(), 400);
    assert_eq!(body_json(&response), json!({"error_message": "Username is required"}));
}

#[tokio::test]
async fn test_user_profile_unknown_user() {
    let harness = harness();
    let response = harness
        .send(request(Method::POST, "/profile/user", Some(json!({"username": "ghost"})), None))
        .await;

    assert_eq!(response.status(), 400);
    assert_eq!(body_json(&response)["error_message"], "User does not exist.");
}

#[tokio::test]
async fn test_admin_profile_for_admin() {
    let harness = harness();
    let response = harness
        .send(request(Method::POST, "/profile/admin", Some(json!({"username": "boss"})), None))
        .await;

    assert_eq!(response.status(), 200);
    let body = body_json(&response);
    assert_eq!(body["message"], "Profile Admin access successful");
    assert_eq!(body["user_attributes"]["email"], "boss@example.com");
}

#[tokio::test]
async fn test_admin_profile_rejects_regular_user() {
    let harness = harness();
    let response = harness
        .send(request(Method::POST, "/profile/admin", Some(json!({"username": "worker"})), None))
        .await;

    assert_eq!(response.status(), 403);
    assert_eq!(body_json(&response), json!({"error_message": "User is not an admin"}));
}

#[tokio::test]
async fn test_own_profile_from_token() {
    let harness = harness();
    let token = token_for("sub-worker");
    let response = harness.send(request(Method::GET, "/dev/profile/me", None, Some(&token))).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
    assert_eq!(body_json(&response), json!({"user_id": "sub-worker", "display_name": "Worker", "age": 30}));
}

#[tokio::test]
async fn test_own_profile_not_found() {
    let harness = harness();
    let token = token_for("sub-boss");
    let response = harness.send(request(Method::GET, "/profile/me", None, Some(&token))).await;

    assert_eq!(response.status(), 404);
    assert_eq!(body_json(&response), json!({"error_message": "User profile not found"}));
}

#[tokio::test]
async fn test_own_profile_requires_token() {
    let harness = harness();
    let response = harness.send(request(Method::GET, "/profile/me", None, None)).await;
    assert_eq!(response.status(), 401);
    assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");

    let response = harness.send(request(Method::GET, "/profile/me", None, Some("garbage"))).await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_own_profile_table_unavailable() {
    let harness = harness();
    harness.profiles.set_unavailable(true);
    let token = token_for("sub-worker");
    let response = harness.send(request(Method::GET, "/profile/me", None, Some(&token))).await;

    assert_eq!(response.status(), 500);
}

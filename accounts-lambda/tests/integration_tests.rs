mod common;

#[cfg(test)]
mod tests {
    use http::Method;
    use serde_json::json;
    use crate::common::{body_json, request, Harness};

    #[tokio::test]
    async fn test_lambda_handler_status_path() {
        let harness = Harness::new();
        let response = harness.send(request(Method::GET, "/dev/status", None, None)).await;

        assert_eq!(response.status(), 200);
        assert_eq!(body_json(&response), json!({"status": "OK"}));
    }

    #[tokio::test]
    async fn test_lambda_handler_not_found_path() {
        let harness = Harness::new();
        let response = harness.send(request(Method::GET, "/dev/unknown", None, None)).await;

        assert_eq!(response.status(), 404);
        assert_eq!(body_json(&response), json!({"error_message": "Not Found"}));
    }

    #[tokio::test]
    async fn test_wrong_method_is_not_found() {
        let harness = Harness::new();
        let response = harness.send(request(Method::PATCH, "/prod/users/1", None, None)).await;

        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_preflight_returns_cors_headers() {
        let harness = Harness::new();
        let response = harness.send(request(Method::OPTIONS, "/profile/me", None, None)).await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        assert!(response.headers()["Access-Control-Allow-Methods"].to_str().unwrap().contains("DELETE"));
    }
}

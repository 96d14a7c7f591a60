//! Router-level tests for the composed API

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::app::build_router;
use crate::config::{Environment, ServerConfig};

fn app(environment: Environment) -> Router {
    let config = ServerConfig {
        environment,
        ..ServerConfig::default()
    };
    build_router(&config)
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            None,
            r#"{"username":"admin","password":"password"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_health() {
    let response = app(Environment::Production)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["service"], json!("matrix-api"));
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app(Environment::Production)
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await, json!({"error": "Endpoint not found"}));
}

#[tokio::test]
async fn test_login_then_statistics() {
    let app = app(Environment::Production);
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/statistics",
            Some(&token),
            r#"{"data":[[1,2,3],[4,5,6],[7,8,9]]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["user"], json!("admin"));
    assert_eq!(body["processedBy"], json!("matrix-api"));
    assert_eq!(body["statistics"]["totalSum"], json!(45));
    assert_eq!(body["statistics"]["average"], json!(5));
}

#[tokio::test]
async fn test_statistics_requires_authorization() {
    let app = app(Environment::Production);

    let response = app
        .clone()
        .oneshot(post_json("/api/statistics", None, r#"{"data":[[1]]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Missing authorization header"})
    );

    let request = Request::builder()
        .method("POST")
        .uri("/api/statistics")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::from(r#"{"data":[[1]]}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Invalid authorization header format"})
    );
}

#[tokio::test]
async fn test_token_from_another_secret_is_rejected() {
    let other = build_router(&ServerConfig {
        auth: auth::AuthConfig::with_secret("another-secret"),
        ..ServerConfig::default()
    });
    let foreign_token = login(&other).await;

    let response = app(Environment::Production)
        .oneshot(post_json(
            "/api/statistics",
            Some(&foreign_token),
            r#"{"data":[[1]]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Invalid or expired token"})
    );
}

#[tokio::test]
async fn test_error_details_only_in_development() {
    for (environment, expect_details) in [
        (Environment::Production, false),
        (Environment::Development, true),
    ] {
        let response = app(environment)
            .oneshot(post_json("/login", None, "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], json!("Invalid JSON format"));
        assert_eq!(body.get("details").is_some(), expect_details, "{environment}");
    }
}

async fn boom() -> &'static str {
    panic!("boom")
}

#[tokio::test]
async fn test_panics_become_internal_errors() {
    use axum::routing::get;
    use tower_http::catch_panic::CatchPanicLayer;

    for (environment, expect_details) in [
        (Environment::Production, false),
        (Environment::Development, true),
    ] {
        let router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(crate::app::panic_response))
            .layer(axum::middleware::map_response_with_state(
                environment,
                crate::app::render_error_details,
            ));

        let response = router
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], json!("Internal server error"));
        if expect_details {
            assert_eq!(body["details"], json!("boom"));
        } else {
            assert!(body.get("details").is_none());
        }
    }
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/statistics")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();

    let response = app(Environment::Production).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

//! Router-level tests for the auth crate

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::Router;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::{AuthConfig, AuthenticatedUser, TokenService, auth_router, require_bearer_token};

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new(Arc::new(AuthConfig::with_secret(
            "router-test-secret",
        ))))
    }

    fn app(tokens: Arc<TokenService>) -> Router {
        let protected = Router::new()
            .route(
                "/whoami",
                get(|user: AuthenticatedUser| async move { user.username }),
            )
            .route_layer(axum::middleware::from_fn_with_state(
                tokens.clone(),
                require_bearer_token,
            ));

        Router::new().merge(auth_router(tokens)).merge(protected)
    }

    fn login_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let tokens = tokens();
        let response = app(tokens.clone())
            .oneshot(login_request(r#"{"username":"admin","password":"password"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let token = body["token"].as_str().unwrap();
        assert_eq!(tokens.verify(token).unwrap().username, "admin");
    }

    #[tokio::test]
    async fn test_login_bad_credentials() {
        let response = app(tokens())
            .oneshot(login_request(r#"{"username":"admin","password":"wrong"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Invalid credentials" })
        );
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let response = app(tokens())
            .oneshot(login_request(r#"{"username":"admin"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Username and password are required" })
        );
    }

    #[tokio::test]
    async fn test_login_without_json_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"username":"admin","password":"password"}"#))
            .unwrap();

        let response = app(tokens()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Username and password are required" })
        );
    }

    #[tokio::test]
    async fn test_login_malformed_json() {
        let response = app(tokens())
            .oneshot(login_request(r#"{"username":"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Invalid JSON format" })
        );
    }

    #[tokio::test]
    async fn test_protected_route_without_header() {
        let response = app(tokens())
            .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Missing authorization header" })
        );
    }

    #[tokio::test]
    async fn test_protected_route_with_malformed_header() {
        let response = app(tokens())
            .oneshot(
                Request::get("/whoami")
                    .header(header::AUTHORIZATION, "Bearer")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Invalid authorization header format" })
        );
    }

    #[tokio::test]
    async fn test_protected_route_with_foreign_token() {
        let foreign = TokenService::new(Arc::new(AuthConfig::with_secret("someone-else")))
            .issue("admin")
            .unwrap();

        let response = app(tokens())
            .oneshot(
                Request::get("/whoami")
                    .header(header::AUTHORIZATION, format!("Bearer {}", foreign.token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Invalid or expired token" })
        );
    }

    #[tokio::test]
    async fn test_user_extractor_without_middleware_is_internal_error() {
        let app = Router::new().route(
            "/unguarded",
            get(|user: AuthenticatedUser| async move { user.username }),
        );

        let response = app
            .oneshot(Request::get("/unguarded").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Internal server error during authentication" })
        );
    }

    #[tokio::test]
    async fn test_protected_route_attaches_user() {
        let tokens = tokens();
        let issued = tokens.issue("admin").unwrap();

        let response = app(tokens)
            .oneshot(
                Request::get("/whoami")
                    .header(header::AUTHORIZATION, format!("Bearer {}", issued.token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"admin");
    }
}

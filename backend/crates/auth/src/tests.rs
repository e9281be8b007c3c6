//! Router-level tests for the account lifecycle
//! Drives the real routers against the in-memory Credential Store.

#[cfg(test)]
mod account_flow_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::application::token::TokenIssuer;
    use crate::domain::value_object::account_kind::AccountKind;
    use crate::infra::memory::InMemoryAccountRepository;
    use crate::presentation::router::account_router_generic;

    fn app() -> Router {
        let config = Arc::new(AuthConfig::development());
        let tokens = Arc::new(TokenIssuer::new(&config));
        let repo = InMemoryAccountRepository::new();

        Router::new()
            .nest(
                "/api/v1/user",
                account_router_generic(AccountKind::Buyer, repo.clone(), config.clone(), tokens.clone()),
            )
            .nest(
                "/api/v1/seller",
                account_router_generic(AccountKind::Seller, repo, config, tokens),
            )
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn register(app: &Router, kind: &str, email: &str, password: &str) -> StatusCode {
        send(
            app,
            Method::POST,
            &format!("/api/v1/{kind}/register"),
            None,
            Some(json!({ "fullName": "A", "email": email, "password": password })),
        )
        .await
        .0
    }

    async fn login(app: &Router, kind: &str, body: Value) -> (StatusCode, Value) {
        send(app, Method::POST, &format!("/api/v1/{kind}/login"), None, Some(body)).await
    }

    async fn token_for(app: &Router, kind: &str, email: &str, password: &str) -> String {
        let (status, body) = login(app, kind, json!({ "email": email, "password": password })).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_register_login_profile() {
        let app = app();

        assert_eq!(register(&app, "user", "a@x.com", "pw1").await, StatusCode::CREATED);

        let (status, body) = login(&app, "user", json!({ "email": "a@x.com", "password": "pw1" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful");
        let token = body["token"].as_str().unwrap();

        let (status, profile) =
            send(&app, Method::GET, "/api/v1/user/profile", Some(token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile["fullName"], "A");
        assert_eq!(profile["email"], "a@x.com");
        assert!(profile.get("password").is_none());
        assert!(profile.get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn test_profile_without_header_is_401() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/user/profile", None, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Authentication token is missing");
    }

    #[tokio::test]
    async fn test_invalid_token_is_401() {
        let app = app();
        let (status, body) =
            send(&app, Method::GET, "/api/v1/seller/profile", Some("abc.def"), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "You are not authorized to access this route");
    }

    #[tokio::test]
    async fn test_buyer_token_rejected_on_seller_routes() {
        let app = app();
        register(&app, "user", "a@x.com", "pw1").await;
        register(&app, "seller", "a@x.com", "pw1").await;
        let buyer_token = token_for(&app, "user", "a@x.com", "pw1").await;

        let (status, _) =
            send(&app, Method::GET, "/api/v1/seller/profile", Some(&buyer_token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_kinds_are_separate_namespaces() {
        let app = app();

        assert_eq!(register(&app, "user", "a@x.com", "pw1").await, StatusCode::CREATED);
        assert_eq!(register(&app, "seller", "a@x.com", "pw2").await, StatusCode::CREATED);

        // Each kind checks its own password
        let (status, _) = login(&app, "seller", json!({ "email": "a@x.com", "password": "pw1" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        token_for(&app, "seller", "a@x.com", "pw2").await;
    }

    #[tokio::test]
    async fn test_duplicate_registration() {
        let app = app();
        register(&app, "user", "a@x.com", "pw1").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/user/register",
            None,
            Some(json!({ "fullName": "B", "email": " A@X.com ", "password": "pw2" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User already exists! Try logging in.");
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/seller/register",
            None,
            Some(json!({ "fullName": "A", "email": "a@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please provide all the required fields");

        let (status, body) = login(&app, "user", json!({ "email": "a@x.com" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please provide all the required fields");
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/user/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Invalid request body");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/user/register",
            None,
            Some(json!({ "fullName": 7, "email": "a@x.com", "password": "pw1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_empty_body_reports_missing_fields() {
        let app = app();

        for uri in ["/api/v1/user/register", "/api/v1/seller/login"] {
            let (status, body) = send(&app, Method::POST, uri, None, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["message"], "Please provide all the required fields", "{uri}");
        }

        let token = {
            register(&app, "user", "a@x.com", "pw1").await;
            token_for(&app, "user", "a@x.com", "pw1").await
        };
        let (status, body) =
            send(&app, Method::PATCH, "/api/v1/user/editProfile", Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name and Email cannot be empty");
    }

    #[tokio::test]
    async fn test_login_failures() {
        let app = app();
        register(&app, "user", "a@x.com", "pw1").await;

        let (status, body) = login(&app, "user", json!({ "email": "b@x.com", "password": "pw1" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User does not exist! Try registering.");

        let (status, body) = login(&app, "user", json!({ "email": "a@x.com", "password": "pw2" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Incorrect Credentials");
    }

    #[tokio::test]
    async fn test_delete_is_soft_and_idempotent() {
        let app = app();
        register(&app, "user", "a@x.com", "pw1").await;
        let token = token_for(&app, "user", "a@x.com", "pw1").await;

        for _ in 0..2 {
            let (status, body) =
                send(&app, Method::POST, "/api/v1/user/delete", Some(&token), None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], "User deleted successfully");
        }

        // Deleted accounts cannot log in, and their email stays reserved
        let (status, _) = login(&app, "user", json!({ "email": "a@x.com", "password": "pw1" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(register(&app, "user", "a@x.com", "pw1").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_edit_profile_and_mobile_login() {
        let app = app();
        register(&app, "seller", "a@x.com", "pw1").await;
        let token = token_for(&app, "seller", "a@x.com", "pw1").await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/v1/seller/editProfile",
            Some(&token),
            Some(json!({
                "fullName": "Shop A",
                "email": "shop@x.com",
                "mobile": "9876543210",
                "address": "1 Main St"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["message"], "Profile updated successfully");
        assert_eq!(body["profile"]["mobile"], "9876543210");

        // Password untouched, both login keys work
        token_for(&app, "seller", "shop@x.com", "pw1").await;
        let (status, _) = login(
            &app,
            "seller",
            json!({ "mobile": "9876543210", "password": "pw1" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_edit_profile_requires_name_and_email() {
        let app = app();
        register(&app, "user", "a@x.com", "pw1").await;
        let token = token_for(&app, "user", "a@x.com", "pw1").await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/v1/user/editProfile",
            Some(&token),
            Some(json!({ "fullName": "A" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name and Email cannot be empty");
    }

    #[tokio::test]
    async fn test_edit_profile_changes_password() {
        let app = app();
        register(&app, "user", "a@x.com", "pw1").await;
        let token = token_for(&app, "user", "a@x.com", "pw1").await;

        let (status, _) = send(
            &app,
            Method::PATCH,
            "/api/v1/user/editProfile",
            Some(&token),
            Some(json!({ "fullName": "A", "email": "a@x.com", "password": "pw2" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = login(&app, "user", json!({ "email": "a@x.com", "password": "pw1" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        token_for(&app, "user", "a@x.com", "pw2").await;
    }

    #[tokio::test]
    async fn test_edit_profile_conflicts() {
        let app = app();
        register(&app, "user", "a@x.com", "pw1").await;
        register(&app, "user", "b@x.com", "pw1").await;
        let token_a = token_for(&app, "user", "a@x.com", "pw1").await;
        let token_b = token_for(&app, "user", "b@x.com", "pw1").await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/v1/user/editProfile",
            Some(&token_b),
            Some(json!({ "fullName": "B", "email": "a@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Email is already in use");

        let (status, _) = send(
            &app,
            Method::PATCH,
            "/api/v1/user/editProfile",
            Some(&token_a),
            Some(json!({ "fullName": "A", "email": "a@x.com", "mobile": "9876543210" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/v1/user/editProfile",
            Some(&token_b),
            Some(json!({ "fullName": "B", "email": "b@x.com", "mobile": "9876543210" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Mobile number is already in use");
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/user/register",
            None,
            Some(json!({ "fullName": "A", "email": "not-an-email", "password": "pw1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid email format");
        assert_eq!(body["action"], "Please enter a valid email address");
    }
}

//! Router-level tests for catalog and storefront
//! Accounts come from the real `auth` routers on an in-memory store.

#[cfg(test)]
mod storefront_flow_tests {
    use std::sync::Arc;

    use auth::{
        AccountKind, AuthConfig, AuthGate, InMemoryAccountRepository, TokenIssuer,
        account_router_generic,
    };
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryShopRepository;
    use crate::presentation::router::{buyer_router_generic, seller_router_generic};

    fn app() -> Router {
        let config = Arc::new(AuthConfig::development());
        let tokens = Arc::new(TokenIssuer::new(&config));
        let accounts = InMemoryAccountRepository::new();
        let shop = InMemoryShopRepository::new();

        let user = account_router_generic(
            AccountKind::Buyer,
            accounts.clone(),
            config.clone(),
            tokens.clone(),
        )
        .merge(buyer_router_generic(
            shop.clone(),
            AuthGate::new(AccountKind::Buyer, tokens.clone()),
        ));

        let seller = account_router_generic(
            AccountKind::Seller,
            accounts,
            config,
            tokens.clone(),
        )
        .merge(seller_router_generic(
            shop,
            AuthGate::new(AccountKind::Seller, tokens),
        ));

        Router::new()
            .nest("/api/v1/user", user)
            .nest("/api/v1/seller", seller)
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
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn signed_in(app: &Router, kind: &str, email: &str) -> String {
        let (status, _) = send(
            app,
            Method::POST,
            &format!("/api/v1/{kind}/register"),
            None,
            Some(json!({ "fullName": "A", "email": email, "password": "pw1" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            app,
            Method::POST,
            &format!("/api/v1/{kind}/login"),
            None,
            Some(json!({ "email": email, "password": "pw1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    /// Seller token plus one listed product id
    async fn seller_with_product(app: &Router) -> (String, String) {
        let seller = signed_in(app, "seller", "shop@x.com").await;

        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/seller/addCategory",
            Some(&seller),
            Some(json!({ "name": "Stationery" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Category created successfully");
        let category = body["category"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/seller/addProduct",
            Some(&seller),
            Some(json!({
                "name": "Pen",
                "price": 2.5,
                "description": "Blue ink",
                "category": category,
                "stock": 10
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["message"], "Product inserted successfully");
        let product = body["product"]["id"].as_str().unwrap().to_string();

        (seller, product)
    }

    #[tokio::test]
    async fn test_catalog_and_preview() {
        let app = app();
        let (seller, _) = seller_with_product(&app).await;

        let (status, body) = send(&app, Method::GET, "/api/v1/user/preview", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "name": "Pen", "description": "Blue ink", "price": 2.5 }]));

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/seller/listedProducts",
            Some(&seller),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["products"].as_array().unwrap().len(), 1);
        assert_eq!(body["products"][0]["stock"], 10);
    }

    #[tokio::test]
    async fn test_category_rules() {
        let app = app();
        let seller = signed_in(&app, "seller", "shop@x.com").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/seller/addCategory",
            Some(&seller),
            Some(json!({ "name": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Category name cannot be empty!");

        for expected in [StatusCode::OK, StatusCode::BAD_REQUEST] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/api/v1/seller/addCategory",
                Some(&seller),
                Some(json!({ "name": "Books" })),
            )
            .await;
            assert_eq!(status, expected);
        }
    }

    #[tokio::test]
    async fn test_add_product_validation() {
        let app = app();
        let seller = signed_in(&app, "seller", "shop@x.com").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/seller/addProduct",
            Some(&seller),
            Some(json!({ "name": "Pen", "price": 0, "description": "x", "category": "c" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please provide all the required fields");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/seller/addProduct",
            Some(&seller),
            Some(json!({ "name": "Pen", "price": 1, "description": "x", "category": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Category does not exist");
    }

    #[tokio::test]
    async fn test_seller_routes_need_seller_token() {
        let app = app();
        let buyer = signed_in(&app, "user", "a@x.com").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/seller/addCategory",
            Some(&buyer),
            Some(json!({ "name": "Books" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(&app, Method::GET, "/api/v1/user/cart", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Authentication token is missing");
    }

    #[tokio::test]
    async fn test_cart_keeps_duplicates_in_order() {
        let app = app();
        let (_, product) = seller_with_product(&app).await;
        let buyer = signed_in(&app, "user", "a@x.com").await;

        for _ in 0..2 {
            let (status, body) = send(
                &app,
                Method::POST,
                &format!("/api/v1/user/addProductToCart?productId={product}"),
                Some(&buyer),
                None,
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], "Product added to cart successfully");
        }

        let (status, body) = send(&app, Method::GET, "/api/v1/user/cart", Some(&buyer), None).await;
        assert_eq!(status, StatusCode::OK);
        let cart = body["cart"].as_array().unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0]["name"], "Pen");
        assert_eq!(cart[0]["price"], 2.5);
    }

    #[tokio::test]
    async fn test_add_to_cart_errors() {
        let app = app();
        let buyer = signed_in(&app, "user", "a@x.com").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/user/addProductToCart",
            Some(&buyer),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Product Id is missing");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/user/addProductToCart?productId=missing",
            Some(&buyer),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Product does not exist");
    }

    #[tokio::test]
    async fn test_buy_one_and_orders() {
        let app = app();
        let (_, product) = seller_with_product(&app).await;
        let buyer = signed_in(&app, "user", "a@x.com").await;

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/user/buyOne?productId={product}"),
            Some(&buyer),
            Some(json!({ "quantity": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["message"], "Order created successfully");
        assert_eq!(body["order"]["status"], "pending");
        assert_eq!(body["order"]["products"][0]["product"], product.as_str());
        assert_eq!(body["order"]["products"][0]["quantity"], 3);
        assert_eq!(body["order"]["products"][0]["totalPrice"], 7.5);

        let (status, body) =
            send(&app, Method::GET, "/api/v1/user/orders", Some(&buyer), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["orders"].as_array().unwrap().len(), 1);

        // No stock reservation
        let (_, body) = send(&app, Method::GET, "/api/v1/user/preview", None, None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_buy_one_errors() {
        let app = app();
        let (_, product) = seller_with_product(&app).await;
        let buyer = signed_in(&app, "user", "a@x.com").await;

        let cases = [
            ("/api/v1/user/buyOne".to_string(), json!({ "quantity": 1 }), StatusCode::BAD_REQUEST, "Product ID is missing"),
            (format!("/api/v1/user/buyOne?productId={product}"), json!({ "quantity": 0 }), StatusCode::BAD_REQUEST, "Invalid quantity"),
            (format!("/api/v1/user/buyOne?productId={product}"), json!({}), StatusCode::BAD_REQUEST, "Invalid quantity"),
            (format!("/api/v1/user/buyOne?productId={product}"), json!({ "quantity": 1.5 }), StatusCode::BAD_REQUEST, "Invalid quantity"),
            (format!("/api/v1/user/buyOne?productId={product}"), json!({ "quantity": "2" }), StatusCode::BAD_REQUEST, "Invalid quantity"),
            ("/api/v1/user/buyOne?productId=ghost".to_string(), json!({ "quantity": 1 }), StatusCode::NOT_FOUND, "Product does not exist"),
        ];

        for (uri, body, expected_status, expected_message) in cases {
            let (status, response) =
                send(&app, Method::POST, &uri, Some(&buyer), Some(body)).await;
            assert_eq!(status, expected_status, "{uri}");
            assert_eq!(response["message"], expected_message, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_missing_or_unreadable_body() {
        let app = app();
        let (seller, product) = seller_with_product(&app).await;
        let buyer = signed_in(&app, "user", "a@x.com").await;

        let cases = [
            ("/api/v1/user/buyOne".to_string(), &buyer, "Product ID is missing"),
            (format!("/api/v1/user/buyOne?productId={product}"), &buyer, "Invalid quantity"),
            ("/api/v1/seller/addProduct".to_string(), &seller, "Please provide all the required fields"),
            ("/api/v1/seller/addCategory".to_string(), &seller, "Category name cannot be empty!"),
        ];
        for (uri, token, expected) in cases {
            let (status, body) = send(&app, Method::POST, &uri, Some(token), None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["message"], expected, "{uri}");
        }

        // Broken JSON: the product id check still comes first
        for (uri, expected) in [
            ("/api/v1/user/buyOne".to_string(), "Product ID is missing"),
            (format!("/api/v1/user/buyOne?productId={product}"), "Invalid request body"),
        ] {
            let request = Request::builder()
                .method(Method::POST)
                .uri(&uri)
                .header(header::AUTHORIZATION, format!("Bearer {buyer}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"quantity\":"))
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["message"], expected, "{uri}");
        }
    }
}

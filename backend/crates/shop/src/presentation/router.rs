//! Shop Routers
//!
//! Merged into the account routers of the matching kind. Protected routes
//! reuse that kind's [`AuthGate`].

use auth::{AccountKind, AuthGate, require_principal};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::{CartRepository, CatalogRepository, OrderRepository};
use crate::infra::postgres::PgShopRepository;
use crate::presentation::handlers::{self, ShopAppState};

/// Seller routes backed by PostgreSQL
pub fn seller_router(repo: PgShopRepository, gate: AuthGate) -> Router {
    seller_router_generic(repo, gate)
}

/// Buyer routes backed by PostgreSQL
pub fn buyer_router(repo: PgShopRepository, gate: AuthGate) -> Router {
    buyer_router_generic(repo, gate)
}

pub fn seller_router_generic<R>(repo: R, gate: AuthGate) -> Router
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    debug_assert_eq!(gate.kind(), AccountKind::Seller);

    let state = ShopAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/addCategory", post(handlers::add_category::<R>))
        .route("/addProduct", post(handlers::add_product::<R>))
        .route("/listedProducts", get(handlers::listed_products::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_principal))
        .with_state(state)
}

pub fn buyer_router_generic<R>(repo: R, gate: AuthGate) -> Router
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    debug_assert_eq!(gate.kind(), AccountKind::Buyer);

    let state = ShopAppState {
        repo: Arc::new(repo),
    };

    let protected = Router::new()
        .route("/addProductToCart", post(handlers::add_product_to_cart::<R>))
        .route("/cart", get(handlers::cart::<R>))
        .route("/buyOne", post(handlers::buy_one::<R>))
        .route("/orders", get(handlers::orders::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_principal));

    Router::new()
        .route("/preview", get(handlers::preview::<R>))
        .merge(protected)
        .with_state(state)
}

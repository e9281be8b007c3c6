//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::{AccountKind, AuthGate, PgAccountRepository, TokenIssuer, account_router};
use axum::http::{self, Method, header};
use shop::{PgShopRepository, buyer_router, seller_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,shop=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = Arc::new(config.auth);
    let tokens = Arc::new(TokenIssuer::new(&auth_config));
    let accounts = PgAccountRepository::new(pool.clone());
    let shop = PgShopRepository::new(pool);

    let user = account_router(
        AccountKind::Buyer,
        accounts.clone(),
        auth_config.clone(),
        tokens.clone(),
    )
    .merge(buyer_router(
        shop.clone(),
        AuthGate::new(AccountKind::Buyer, tokens.clone()),
    ));

    let seller = account_router(
        AccountKind::Seller,
        accounts,
        auth_config,
        tokens.clone(),
    )
    .merge(seller_router(
        shop,
        AuthGate::new(AccountKind::Seller, tokens),
    ));

    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let app = routes::app(user, seller)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Shop Backend Module
//!
//! Catalog (categories, products) for sellers and storefront (preview,
//! cart, single-product orders) for buyers. Every protected route sits
//! behind the `auth` gate of its kind.
//!
//! Same layering as `auth`:
//! - `domain/` - Category, Product, Order, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, routers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

pub use error::{ShopError, ShopResult};
pub use infra::{InMemoryShopRepository, PgShopRepository};
pub use presentation::router::{
    buyer_router, buyer_router_generic, seller_router, seller_router_generic,
};

//! Repository Traits

use auth::AccountId;
use kernel::id::{CategoryId, ProductId};

use crate::domain::entity::{category::Category, order::Order, product::Product};
use crate::error::ShopResult;

/// Categories and products
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// Insert a category; a taken name is `ShopError::CategoryExists`
    async fn create_category(&self, category: &Category) -> ShopResult<()>;

    async fn find_category(&self, category_id: &CategoryId) -> ShopResult<Option<Category>>;

    async fn category_name_exists(&self, name: &str) -> ShopResult<bool>;

    async fn create_product(&self, product: &Product) -> ShopResult<()>;

    async fn find_product(&self, product_id: &ProductId) -> ShopResult<Option<Product>>;

    /// Everything a seller listed, oldest first
    async fn products_listed_by(&self, seller: &AccountId) -> ShopResult<Vec<Product>>;

    /// Whole catalog, oldest first
    async fn all_products(&self) -> ShopResult<Vec<Product>>;
}

/// Buyer carts: an append-only list of product references
#[trait_variant::make(CartRepository: Send)]
pub trait LocalCartRepository {
    async fn add_to_cart(&self, buyer: &AccountId, product_id: &ProductId) -> ShopResult<()>;

    /// Products in insertion order, duplicates preserved
    async fn cart_products(&self, buyer: &AccountId) -> ShopResult<Vec<Product>>;
}

#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Insert an order with its lines atomically
    async fn create_order(&self, order: &Order) -> ShopResult<()>;

    /// Oldest first
    async fn orders_for(&self, buyer: &AccountId) -> ShopResult<Vec<Order>>;
}

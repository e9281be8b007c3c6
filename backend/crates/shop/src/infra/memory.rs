//! In-Memory Repository Implementation
//!
//! Vec-backed, so listing order is insertion order like the SQL queries'.

use std::sync::Arc;

use auth::AccountId;
use kernel::id::{CategoryId, ProductId};
use tokio::sync::RwLock;

use crate::domain::entity::{category::Category, order::Order, product::Product};
use crate::domain::repository::{CartRepository, CatalogRepository, OrderRepository};
use crate::error::{ShopError, ShopResult};

#[derive(Default)]
struct ShopState {
    categories: Vec<Category>,
    products: Vec<Product>,
    cart_entries: Vec<(AccountId, ProductId)>,
    orders: Vec<Order>,
}

#[derive(Clone, Default)]
pub struct InMemoryShopRepository {
    state: Arc<RwLock<ShopState>>,
}

impl InMemoryShopRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogRepository for InMemoryShopRepository {
    async fn create_category(&self, category: &Category) -> ShopResult<()> {
        let mut state = self.state.write().await;
        if state.categories.iter().any(|c| c.name == category.name) {
            return Err(ShopError::CategoryExists);
        }
        state.categories.push(category.clone());
        Ok(())
    }

    async fn find_category(&self, category_id: &CategoryId) -> ShopResult<Option<Category>> {
        let state = self.state.read().await;
        Ok(state
            .categories
            .iter()
            .find(|c| &c.category_id == category_id)
            .cloned())
    }

    async fn category_name_exists(&self, name: &str) -> ShopResult<bool> {
        let state = self.state.read().await;
        Ok(state.categories.iter().any(|c| c.name == name))
    }

    async fn create_product(&self, product: &Product) -> ShopResult<()> {
        self.state.write().await.products.push(product.clone());
        Ok(())
    }

    async fn find_product(&self, product_id: &ProductId) -> ShopResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state
            .products
            .iter()
            .find(|p| &p.product_id == product_id)
            .cloned())
    }

    async fn products_listed_by(&self, seller: &AccountId) -> ShopResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state
            .products
            .iter()
            .filter(|p| &p.listed_by == seller)
            .cloned()
            .collect())
    }

    async fn all_products(&self) -> ShopResult<Vec<Product>> {
        Ok(self.state.read().await.products.clone())
    }
}

impl CartRepository for InMemoryShopRepository {
    async fn add_to_cart(&self, buyer: &AccountId, product_id: &ProductId) -> ShopResult<()> {
        self.state
            .write()
            .await
            .cart_entries
            .push((*buyer, *product_id));
        Ok(())
    }

    async fn cart_products(&self, buyer: &AccountId) -> ShopResult<Vec<Product>> {
        let state = self.state.read().await;
        let products = state
            .cart_entries
            .iter()
            .filter(|(owner, _)| owner == buyer)
            .filter_map(|(_, id)| state.products.iter().find(|p| &p.product_id == id))
            .cloned()
            .collect();
        Ok(products)
    }
}

impl OrderRepository for InMemoryShopRepository {
    async fn create_order(&self, order: &Order) -> ShopResult<()> {
        self.state.write().await.orders.push(order.clone());
        Ok(())
    }

    async fn orders_for(&self, buyer: &AccountId) -> ShopResult<Vec<Order>> {
        let state = self.state.read().await;
        Ok(state
            .orders
            .iter()
            .filter(|o| &o.buyer_id == buyer)
            .cloned()
            .collect())
    }
}

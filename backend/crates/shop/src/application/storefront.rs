//! Storefront Use Cases (buyer side)
//!
//! Buyer ids come from a verified token. The shop does not re-check the
//! account row: tokens are only minted for existing accounts and rows are
//! never removed.

use std::str::FromStr;
use std::sync::Arc;

use auth::AccountId;
use kernel::id::ProductId;

use crate::application::required;
use crate::domain::entity::{order::Order, product::Product};
use crate::domain::repository::{CartRepository, CatalogRepository, OrderRepository};
use crate::error::{ShopError, ShopResult};

/// Public product listing
pub struct PreviewUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> PreviewUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ShopResult<Vec<Product>> {
        self.repo.all_products().await
    }
}

pub struct AddToCartUseCase<R>
where
    R: CatalogRepository + CartRepository,
{
    repo: Arc<R>,
}

impl<R> AddToCartUseCase<R>
where
    R: CatalogRepository + CartRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, buyer: &AccountId, product_id: Option<String>) -> ShopResult<()> {
        let product_id = required(product_id).ok_or(ShopError::MissingProductId)?;
        let product_id =
            ProductId::from_str(&product_id).map_err(|_| ShopError::ProductNotFound)?;

        let product = self
            .repo
            .find_product(&product_id)
            .await?
            .ok_or(ShopError::ProductNotFound)?;

        self.repo.add_to_cart(buyer, &product.product_id).await?;

        tracing::info!(buyer_id = %buyer, product_id = %product_id, "Product added to cart");

        Ok(())
    }
}

pub struct CartUseCase<R>
where
    R: CartRepository,
{
    repo: Arc<R>,
}

impl<R> CartUseCase<R>
where
    R: CartRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, buyer: &AccountId) -> ShopResult<Vec<Product>> {
        self.repo.cart_products(buyer).await
    }
}

pub struct BuyOneUseCase<R>
where
    R: CatalogRepository + OrderRepository,
{
    repo: Arc<R>,
}

impl<R> BuyOneUseCase<R>
where
    R: CatalogRepository + OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        buyer: &AccountId,
        product_id: Option<String>,
        quantity: Option<i64>,
    ) -> ShopResult<Order> {
        let product_id = required(product_id).ok_or(ShopError::MissingOrderProductId)?;

        let quantity = quantity
            .filter(|q| *q > 0)
            .and_then(|q| i32::try_from(q).ok())
            .ok_or(ShopError::InvalidQuantity)?;

        let product_id =
            ProductId::from_str(&product_id).map_err(|_| ShopError::OrderProductNotFound)?;
        let product = self
            .repo
            .find_product(&product_id)
            .await?
            .ok_or(ShopError::OrderProductNotFound)?;

        let order = Order::single(*buyer, &product, quantity)?;
        self.repo.create_order(&order).await?;

        tracing::info!(
            order_id = %order.order_id,
            buyer_id = %buyer,
            product_id = %product_id,
            quantity,
            "Order created"
        );

        Ok(order)
    }
}

pub struct OrdersUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> OrdersUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, buyer: &AccountId) -> ShopResult<Vec<Order>> {
        self.repo.orders_for(buyer).await
    }
}

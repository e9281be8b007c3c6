//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entity::{
    category::Category,
    order::{Order, OrderLine},
    product::Product,
};

pub use auth::presentation::dto::MessageResponse;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddCategoryRequest {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    pub name: Option<String>,
    /// Accepts a JSON number or a decimal string
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Category id
    pub category: Option<String>,
    pub stock: Option<i64>,
}

/// `?productId=` on the cart and buy routes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub product_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuyOneRequest {
    /// Any JSON value; only whole numbers count as a quantity
    pub quantity: Option<serde_json::Value>,
}

impl BuyOneRequest {
    pub fn quantity(&self) -> Option<i64> {
        self.quantity.as_ref().and_then(serde_json::Value::as_i64)
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.category_id.to_string(),
            name: category.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddCategoryResponse {
    pub message: String,
    pub category: CategoryResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    pub listed_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.product_id.to_string(),
            name: product.name.clone(),
            price: product.price.amount(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category_id.to_string(),
            stock: product.stock,
            listed_by: product.listed_by.to_string(),
            created_at: product.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddProductResponse {
    pub message: String,
    pub product: ProductResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListedProductsResponse {
    pub products: Vec<ProductResponse>,
}

/// Public view of a product (preview and cart)
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.amount(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    pub cart: Vec<ProductSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub product: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl From<&OrderLine> for OrderLineResponse {
    fn from(line: &OrderLine) -> Self {
        Self {
            product: line.product_id.to_string(),
            quantity: line.quantity,
            total_price: line.total_price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub status: &'static str,
    pub order_date: DateTime<Utc>,
    pub products: Vec<OrderLineResponse>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.order_id.to_string(),
            status: order.status.code(),
            order_date: order.ordered_at,
            products: order.lines.iter().map(OrderLineResponse::from).collect(),
            total_price: order.total(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BuyOneResponse {
    pub message: String,
    pub order: OrderResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
}

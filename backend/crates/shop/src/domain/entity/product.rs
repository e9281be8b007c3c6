//! Product Entity
//!
//! A listing owned by the seller that created it. Creating a product is
//! how a seller's listed products grow; nothing removes them.

use auth::AccountId;
use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, ProductId};

use crate::domain::value_object::price::Price;

#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub image: Option<String>,
    pub category_id: CategoryId,
    /// Informational only; orders do not decrement it
    pub stock: Option<i32>,
    /// Listing seller
    pub listed_by: AccountId,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for a new listing
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub image: Option<String>,
    pub category_id: CategoryId,
    pub stock: Option<i32>,
}

impl Product {
    pub fn list(new: NewProduct, seller: AccountId) -> Self {
        Self {
            product_id: ProductId::new(),
            name: new.name,
            price: new.price,
            description: new.description,
            image: new.image,
            category_id: new.category_id,
            stock: new.stock,
            listed_by: seller,
            created_at: Utc::now(),
        }
    }
}

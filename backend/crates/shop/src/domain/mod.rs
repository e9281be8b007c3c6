//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::{category::Category, order::Order, product::Product};
pub use repository::{CartRepository, CatalogRepository, OrderRepository};

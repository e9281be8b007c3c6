//! Entities

pub mod category;
pub mod order;
pub mod product;

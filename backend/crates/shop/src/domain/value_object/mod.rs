//! Value Object Module

pub mod order_status;
pub mod price;

//! Application Layer

pub mod catalog;
pub mod storefront;

pub use catalog::{AddCategoryUseCase, AddProductInput, AddProductUseCase, ListedProductsUseCase};
pub use storefront::{AddToCartUseCase, BuyOneUseCase, CartUseCase, OrdersUseCase, PreviewUseCase};

/// Trimmed; absent and blank both count as "not provided"
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

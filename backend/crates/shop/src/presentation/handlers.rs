//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::Principal;
use platform::body::{BodyRejection, JsonBody};

use crate::application::{
    AddCategoryUseCase, AddProductInput, AddProductUseCase, AddToCartUseCase, BuyOneUseCase,
    CartUseCase, ListedProductsUseCase, OrdersUseCase, PreviewUseCase,
};
use crate::domain::repository::{CartRepository, CatalogRepository, OrderRepository};
use crate::error::{ShopError, ShopResult};
use crate::presentation::dto::{
    AddCategoryRequest, AddCategoryResponse, AddProductRequest, AddProductResponse,
    BuyOneRequest, BuyOneResponse, CartResponse, ListedProductsResponse, MessageResponse,
    OrderResponse, OrdersResponse, ProductQuery, ProductResponse, ProductSummary,
};

/// Shared state for shop handlers
#[derive(Clone)]
pub struct ShopAppState<R>
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Seller
// ============================================================================

/// POST /api/v1/seller/addCategory
pub async fn add_category<R>(
    State(state): State<ShopAppState<R>>,
    seller: Principal,
    payload: Result<JsonBody<AddCategoryRequest>, BodyRejection>,
) -> ShopResult<Json<AddCategoryResponse>>
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let JsonBody(req) = payload?;

    let category = AddCategoryUseCase::new(state.repo.clone())
        .execute(&seller.account_id, req.name)
        .await?;

    Ok(Json(AddCategoryResponse {
        message: "Category created successfully".to_string(),
        category: (&category).into(),
    }))
}

/// POST /api/v1/seller/addProduct
pub async fn add_product<R>(
    State(state): State<ShopAppState<R>>,
    seller: Principal,
    payload: Result<JsonBody<AddProductRequest>, BodyRejection>,
) -> ShopResult<Json<AddProductResponse>>
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let JsonBody(req) = payload?;

    let input = AddProductInput {
        name: req.name,
        price: req.price,
        description: req.description,
        image: req.image,
        category: req.category,
        stock: req.stock,
    };

    let product = AddProductUseCase::new(state.repo.clone())
        .execute(&seller.account_id, input)
        .await?;

    Ok(Json(AddProductResponse {
        message: "Product inserted successfully".to_string(),
        product: (&product).into(),
    }))
}

/// GET /api/v1/seller/listedProducts
pub async fn listed_products<R>(
    State(state): State<ShopAppState<R>>,
    seller: Principal,
) -> ShopResult<Json<ListedProductsResponse>>
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let products = ListedProductsUseCase::new(state.repo.clone())
        .execute(&seller.account_id)
        .await?;

    Ok(Json(ListedProductsResponse {
        products: products.iter().map(ProductResponse::from).collect(),
    }))
}

// ============================================================================
// Buyer
// ============================================================================

/// GET /api/v1/user/preview (public)
pub async fn preview<R>(
    State(state): State<ShopAppState<R>>,
) -> ShopResult<Json<Vec<ProductSummary>>>
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let products = PreviewUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(products.iter().map(ProductSummary::from).collect()))
}

/// POST /api/v1/user/addProductToCart?productId=
pub async fn add_product_to_cart<R>(
    State(state): State<ShopAppState<R>>,
    buyer: Principal,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> ShopResult<Json<MessageResponse>>
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;

    AddToCartUseCase::new(state.repo.clone())
        .execute(&buyer.account_id, query.product_id)
        .await?;

    Ok(Json(MessageResponse::new("Product added to cart successfully")))
}

/// GET /api/v1/user/cart
pub async fn cart<R>(
    State(state): State<ShopAppState<R>>,
    buyer: Principal,
) -> ShopResult<Json<CartResponse>>
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let products = CartUseCase::new(state.repo.clone())
        .execute(&buyer.account_id)
        .await?;

    Ok(Json(CartResponse {
        cart: products.iter().map(ProductSummary::from).collect(),
    }))
}

/// POST /api/v1/user/buyOne?productId= with `{ quantity }`
pub async fn buy_one<R>(
    State(state): State<ShopAppState<R>>,
    buyer: Principal,
    query: Result<Query<ProductQuery>, QueryRejection>,
    payload: Result<JsonBody<BuyOneRequest>, BodyRejection>,
) -> ShopResult<(StatusCode, Json<BuyOneResponse>)>
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;
    // A missing product id outranks an unreadable body
    let req = match payload {
        Ok(JsonBody(req)) => req,
        Err(_) if query.product_id.as_deref().is_none_or(|id| id.trim().is_empty()) => {
            return Err(ShopError::MissingOrderProductId);
        }
        Err(rejection) => return Err(rejection.into()),
    };

    let order = BuyOneUseCase::new(state.repo.clone())
        .execute(&buyer.account_id, query.product_id, req.quantity())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BuyOneResponse {
            message: "Order created successfully".to_string(),
            order: (&order).into(),
        }),
    ))
}

/// GET /api/v1/user/orders
pub async fn orders<R>(
    State(state): State<ShopAppState<R>>,
    buyer: Principal,
) -> ShopResult<Json<OrdersResponse>>
where
    R: CatalogRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let orders = OrdersUseCase::new(state.repo.clone())
        .execute(&buyer.account_id)
        .await?;

    Ok(Json(OrdersResponse {
        orders: orders.iter().map(OrderResponse::from).collect(),
    }))
}

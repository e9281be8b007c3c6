//! Catalog Use Cases (seller side)

use std::str::FromStr;
use std::sync::Arc;

use auth::AccountId;
use kernel::id::CategoryId;
use rust_decimal::Decimal;

use crate::application::required;
use crate::domain::entity::{
    category::Category,
    product::{NewProduct, Product},
};
use crate::domain::repository::CatalogRepository;
use crate::domain::value_object::price::Price;
use crate::error::{ShopError, ShopResult};

pub struct AddCategoryUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> AddCategoryUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, seller: &AccountId, name: Option<String>) -> ShopResult<Category> {
        let category = Category::new(name)?;

        if self.repo.category_name_exists(&category.name).await? {
            return Err(ShopError::CategoryExists);
        }

        self.repo.create_category(&category).await?;

        tracing::info!(
            category_id = %category.category_id,
            seller_id = %seller,
            "Category created"
        );

        Ok(category)
    }
}

#[derive(Debug, Default)]
pub struct AddProductInput {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Category id
    pub category: Option<String>,
    pub stock: Option<i64>,
}

pub struct AddProductUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> AddProductUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, seller: &AccountId, input: AddProductInput) -> ShopResult<Product> {
        let (Some(name), Some(description), Some(category)) = (
            required(input.name),
            required(input.description),
            required(input.category),
        ) else {
            return Err(ShopError::MissingFields);
        };
        let price = Price::new(input.price)?;

        let stock = match input.stock {
            None => None,
            Some(s) if s < 0 => {
                return Err(ShopError::Validation("Stock cannot be negative".to_string()));
            }
            Some(s) => Some(
                i32::try_from(s)
                    .map_err(|_| ShopError::Validation("Stock is too large".to_string()))?,
            ),
        };

        let category_id =
            CategoryId::from_str(&category).map_err(|_| ShopError::CategoryNotFound)?;
        self.repo
            .find_category(&category_id)
            .await?
            .ok_or(ShopError::CategoryNotFound)?;

        let product = Product::list(
            NewProduct {
                name,
                price,
                description,
                image: required(input.image),
                category_id,
                stock,
            },
            *seller,
        );

        self.repo.create_product(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            seller_id = %seller,
            "Product listed"
        );

        Ok(product)
    }
}

pub struct ListedProductsUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> ListedProductsUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, seller: &AccountId) -> ShopResult<Vec<Product>> {
        self.repo.products_listed_by(seller).await
    }
}

//! PostgreSQL Repository Implementations

use std::collections::HashMap;

use auth::AccountId;
use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, OrderId, ProductId};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    category::Category,
    order::{Order, OrderLine},
    product::Product,
};
use crate::domain::repository::{CartRepository, CatalogRepository, OrderRepository};
use crate::domain::value_object::{order_status::OrderStatus, price::Price};
use crate::error::{ShopError, ShopResult};

/// Constraint name from the catalog migration
const CATEGORY_NAME_CONSTRAINT: &str = "categories_name_key";

const PRODUCT_COLUMNS: &str = r#"
    p.product_id,
    p.name,
    p.price,
    p.description,
    p.image,
    p.category_id,
    p.stock,
    p.listed_by,
    p.created_at
"#;

/// PostgreSQL-backed shop repository
#[derive(Clone)]
pub struct PgShopRepository {
    pool: PgPool,
}

impl PgShopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A racing insert of the same category name is still "already exists"
fn map_category_write_error(err: sqlx::Error) -> ShopError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.constraint() == Some(CATEGORY_NAME_CONSTRAINT) {
            return ShopError::CategoryExists;
        }
    }
    ShopError::Database(err)
}

// ============================================================================
// Catalog Repository Implementation
// ============================================================================

impl CatalogRepository for PgShopRepository {
    async fn create_category(&self, category: &Category) -> ShopResult<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (category_id, name, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(category.category_id.as_uuid())
        .bind(&category.name)
        .bind(category.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_category_write_error)?;

        Ok(())
    }

    async fn find_category(&self, category_id: &CategoryId) -> ShopResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, name, created_at
            FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(category_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn category_name_exists(&self, name: &str) -> ShopResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_product(&self, product: &Product) -> ShopResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                name,
                price,
                description,
                image,
                category_id,
                stock,
                listed_by,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(&product.name)
        .bind(product.price.amount())
        .bind(&product.description)
        .bind(product.image.as_deref())
        .bind(product.category_id.as_uuid())
        .bind(product.stock)
        .bind(product.listed_by.as_uuid())
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_product(&self, product_id: &ProductId) -> ShopResult<Option<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.product_id = $1"
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(product_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn products_listed_by(&self, seller: &AccountId) -> ShopResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.listed_by = $1 \
             ORDER BY p.created_at, p.product_id"
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(seller.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn all_products(&self) -> ShopResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p ORDER BY p.created_at, p.product_id"
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }
}

// ============================================================================
// Cart Repository Implementation
// ============================================================================

impl CartRepository for PgShopRepository {
    async fn add_to_cart(&self, buyer: &AccountId, product_id: &ProductId) -> ShopResult<()> {
        sqlx::query("INSERT INTO cart_entries (buyer_id, product_id, added_at) VALUES ($1, $2, $3)")
            .bind(buyer.as_uuid())
            .bind(product_id.as_uuid())
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cart_products(&self, buyer: &AccountId) -> ShopResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM cart_entries c \
             JOIN products p ON p.product_id = c.product_id \
             WHERE c.buyer_id = $1 ORDER BY c.entry_id"
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(buyer.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }
}

// ============================================================================
// Order Repository Implementation
// ============================================================================

impl OrderRepository for PgShopRepository {
    async fn create_order(&self, order: &Order) -> ShopResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (order_id, buyer_id, status, ordered_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(order.order_id.as_uuid())
        .bind(order.buyer_id.as_uuid())
        .bind(order.status.id())
        .bind(order.ordered_at)
        .execute(&mut *tx)
        .await?;

        for (line_no, line) in (1_i32..).zip(&order.lines) {
            sqlx::query(
                r#"
                INSERT INTO order_lines (order_id, line_no, product_id, quantity, total_price)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(order.order_id.as_uuid())
            .bind(line_no)
            .bind(line.product_id.as_uuid())
            .bind(line.quantity)
            .bind(line.total_price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn orders_for(&self, buyer: &AccountId) -> ShopResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT order_id, buyer_id, status, ordered_at
            FROM orders
            WHERE buyer_id = $1
            ORDER BY ordered_at, order_id
            "#,
        )
        .bind(buyer.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        let order_ids: Vec<Uuid> = orders.iter().map(|o| o.order_id).collect();

        let lines = sqlx::query_as::<_, OrderLineRow>(
            r#"
            SELECT order_id, product_id, quantity, total_price
            FROM order_lines
            WHERE order_id = ANY($1)
            ORDER BY order_id, line_no
            "#,
        )
        .bind(&order_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut lines_by_order: HashMap<Uuid, Vec<OrderLine>> = HashMap::new();
        for line in lines {
            lines_by_order
                .entry(line.order_id)
                .or_default()
                .push(OrderLine {
                    product_id: ProductId::from_uuid(line.product_id),
                    quantity: line.quantity,
                    total_price: line.total_price,
                });
        }

        orders
            .into_iter()
            .map(|row| {
                let lines = lines_by_order.remove(&row.order_id).unwrap_or_default();
                row.into_order(lines)
            })
            .collect()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CategoryRow {
    category_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            category_id: CategoryId::from_uuid(self.category_id),
            name: self.name,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    name: String,
    price: Decimal,
    description: String,
    image: Option<String>,
    category_id: Uuid,
    stock: Option<i32>,
    listed_by: Uuid,
    created_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            name: self.name,
            price: Price::from_db(self.price),
            description: self.description,
            image: self.image,
            category_id: CategoryId::from_uuid(self.category_id),
            stock: self.stock,
            listed_by: AccountId::from_uuid(self.listed_by),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    order_id: Uuid,
    buyer_id: Uuid,
    status: i16,
    ordered_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, lines: Vec<OrderLine>) -> ShopResult<Order> {
        let status = OrderStatus::from_id(self.status)
            .ok_or_else(|| ShopError::Internal(format!("Invalid order status: {}", self.status)))?;

        Ok(Order {
            order_id: OrderId::from_uuid(self.order_id),
            buyer_id: AccountId::from_uuid(self.buyer_id),
            status,
            ordered_at: self.ordered_at,
            lines,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderLineRow {
    order_id: Uuid,
    product_id: Uuid,
    quantity: i32,
    total_price: Decimal,
}

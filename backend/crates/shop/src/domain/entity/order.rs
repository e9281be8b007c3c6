//! Order Entity

use auth::AccountId;
use chrono::{DateTime, Utc};
use kernel::id::{OrderId, ProductId};
use rust_decimal::Decimal;

use crate::domain::entity::product::Product;
use crate::domain::value_object::order_status::OrderStatus;
use crate::error::ShopResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i32,
    /// Unit price × quantity at order time
    pub total_price: Decimal,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: OrderId,
    pub buyer_id: AccountId,
    pub status: OrderStatus,
    pub ordered_at: DateTime<Utc>,
    /// At least one line
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// A pending order for `quantity` units of one product
    pub fn single(buyer_id: AccountId, product: &Product, quantity: i32) -> ShopResult<Self> {
        let line = OrderLine {
            product_id: product.product_id,
            quantity,
            total_price: product.price.times(quantity)?,
        };

        Ok(Self {
            order_id: OrderId::new(),
            buyer_id,
            status: OrderStatus::Pending,
            ordered_at: Utc::now(),
            lines: vec![line],
        })
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.total_price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::product::NewProduct;
    use crate::domain::value_object::price::Price;
    use kernel::id::CategoryId;
    use std::str::FromStr;

    #[test]
    fn test_single_line_order() {
        let product = Product::list(
            NewProduct {
                name: "Pen".into(),
                price: Price::new(Some(Decimal::from_str("2.50").unwrap())).unwrap(),
                description: "Blue".into(),
                image: None,
                category_id: CategoryId::new(),
                stock: Some(1),
            },
            AccountId::new(),
        );
        let buyer = AccountId::new();

        let order = Order::single(buyer, &product, 4).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.buyer_id, buyer);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].product_id, product.product_id);
        assert_eq!(order.total(), Decimal::from(10));
        // Stock is not reserved
        assert_eq!(product.stock, Some(1));
    }
}

//! Price Value Object
//!
//! Positive amount with at most two decimal places, sized for the
//! `numeric(12,2)` column.

use rust_decimal::Decimal;

use crate::error::{ShopError, ShopResult};

/// Exclusive upper bound of `numeric(12,2)`
const PRICE_LIMIT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0); // 10^10

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// Absent, zero and negative prices are all "not provided"
    pub fn new(amount: Option<Decimal>) -> ShopResult<Self> {
        let amount = amount
            .map(|a| a.round_dp(2))
            .filter(|a| a.is_sign_positive() && !a.is_zero())
            .ok_or(ShopError::MissingFields)?;

        if amount >= PRICE_LIMIT {
            return Err(ShopError::Validation("Price is too large".to_string()));
        }

        Ok(Self(amount))
    }

    pub fn from_db(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// `price × quantity`; quantity is already known to be positive
    pub fn times(&self, quantity: i32) -> ShopResult<Decimal> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| ShopError::Internal("Order total overflow".to_string()))
    }
}

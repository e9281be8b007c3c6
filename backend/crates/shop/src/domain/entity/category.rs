//! Category Entity

use chrono::{DateTime, Utc};
use kernel::id::CategoryId;

use crate::error::{ShopError, ShopResult};

const CATEGORY_NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct Category {
    pub category_id: CategoryId,
    /// Unique across the catalog
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: Option<String>) -> ShopResult<Self> {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(ShopError::EmptyCategoryName)?;

        if name.chars().count() > CATEGORY_NAME_MAX_CHARS {
            return Err(ShopError::Validation(format!(
                "Category name must be at most {} characters",
                CATEGORY_NAME_MAX_CHARS
            )));
        }

        Ok(Self {
            category_id: CategoryId::new(),
            name,
            created_at: Utc::now(),
        })
    }
}

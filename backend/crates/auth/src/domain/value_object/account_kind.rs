//! Account Kind
//!
//! The buyer/seller discriminator. It selects the record namespace, the
//! token signing secret, and the message wording.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Principal kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum AccountKind {
    /// Shopper with a cart and orders (routes under `/user`)
    Buyer = 1,
    /// Merchant listing products (routes under `/seller`)
    Seller = 2,
}

impl AccountKind {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Create from numeric ID
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::Buyer),
            2 => Some(Self::Seller),
            _ => None,
        }
    }

    /// Stable code used in token claims and logs
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        }
    }

    /// Noun used in user-facing messages ("User already exists!")
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Buyer => "User",
            Self::Seller => "Seller",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

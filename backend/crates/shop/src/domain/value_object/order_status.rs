//! Order Status

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum OrderStatus {
    /// Placed, not yet fulfilled
    #[default]
    Pending = 1,
}

impl OrderStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::Pending),
            _ => None,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

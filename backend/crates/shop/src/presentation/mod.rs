//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ShopAppState;
pub use router::{buyer_router, buyer_router_generic, seller_router, seller_router_generic};

//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the authorization gate.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AccountAppState;
pub use middleware::{AuthGate, Principal, require_principal};
pub use router::{account_router, account_router_generic};

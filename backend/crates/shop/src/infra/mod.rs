//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::InMemoryShopRepository;
pub use postgres::PgShopRepository;

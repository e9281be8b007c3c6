//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Bearer token extraction from `Authorization` headers
//! - JSON request bodies where an empty body means "no fields"

pub mod bearer;
pub mod body;
pub mod password;

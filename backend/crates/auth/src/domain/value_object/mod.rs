//! Value Object Module

pub mod account_id;
pub mod account_kind;
pub mod account_password;
pub mod email;
pub mod full_name;
pub mod mobile;

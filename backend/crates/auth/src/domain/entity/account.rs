//! Account Entity
//!
//! A principal of either kind. Rows are never removed: deletion flips
//! `active` and the record keeps its email and mobile reserved.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    account_id::AccountId, account_kind::AccountKind, account_password::AccountPassword,
    email::Email, full_name::FullName, mobile::Mobile,
};

#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    pub kind: AccountKind,
    pub full_name: FullName,
    /// Unique per kind
    pub email: Email,
    pub password: AccountPassword,
    /// Unique per kind when present
    pub mobile: Option<Mobile>,
    pub address: Option<String>,
    /// Soft-delete flag
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new, active account
    pub fn register(
        kind: AccountKind,
        full_name: FullName,
        email: Email,
        password: AccountPassword,
    ) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            kind,
            full_name,
            email,
            password,
            mobile: None,
            address: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable profile fields
    pub fn update_profile(
        &mut self,
        full_name: FullName,
        email: Email,
        mobile: Option<Mobile>,
        address: Option<String>,
    ) {
        self.full_name = full_name;
        self.email = email;
        self.mobile = mobile;
        self.address = address;
        self.updated_at = Utc::now();
    }

    pub fn change_password(&mut self, password: AccountPassword) {
        self.password = password;
        self.updated_at = Utc::now();
    }

    /// Mark inactive. Returns `false` when the account was already inactive.
    pub fn deactivate(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.updated_at = Utc::now();
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, account_kind::AccountKind, account_password::AccountPassword,
    email::Email, full_name::FullName, mobile::Mobile,
};
use crate::error::{AuthError, AuthResult};

/// Constraint names from the accounts migration
const EMAIL_CONSTRAINT: &str = "accounts_kind_email_key";
const MOBILE_CONSTRAINT: &str = "accounts_kind_mobile_key";

const ACCOUNT_COLUMNS: &str = r#"
    account_id,
    kind,
    full_name,
    email,
    password_hash,
    mobile,
    address,
    active,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed Credential Store
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(
        &self,
        predicate: &str,
        kind: AccountKind,
        value: &str,
    ) -> AuthResult<Option<Account>> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE kind = $1 AND {predicate} = $2"
        );

        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(kind.id())
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(AccountRow::into_account).transpose()
    }
}

/// Unique violations become domain conflicts; everything else stays a store error
fn map_write_error(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some(EMAIL_CONSTRAINT) => return AuthError::EmailTaken,
                Some(MOBILE_CONSTRAINT) => return AuthError::MobileTaken,
                _ => {}
            }
        }
    }
    AuthError::Database(err)
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                kind,
                full_name,
                email,
                password_hash,
                mobile,
                address,
                active,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.kind.id())
        .bind(account.full_name.as_str())
        .bind(account.email.as_str())
        .bind(account.password.as_str())
        .bind(account.mobile.as_ref().map(Mobile::as_str))
        .bind(account.address.as_deref())
        .bind(account.active)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        kind: AccountKind,
        account_id: &AccountId,
    ) -> AuthResult<Option<Account>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE kind = $1 AND account_id = $2");

        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(kind.id())
            .bind(account_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn find_by_email(&self, kind: AccountKind, email: &Email) -> AuthResult<Option<Account>> {
        self.fetch_one_where("email", kind, email.as_str()).await
    }

    async fn find_by_mobile(
        &self,
        kind: AccountKind,
        mobile: &Mobile,
    ) -> AuthResult<Option<Account>> {
        self.fetch_one_where("mobile", kind, mobile.as_str()).await
    }

    async fn exists_by_email(&self, kind: AccountKind, email: &Email) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE kind = $1 AND email = $2)",
        )
        .bind(kind.id())
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts SET
                full_name = $3,
                email = $4,
                password_hash = $5,
                mobile = $6,
                address = $7,
                active = $8,
                updated_at = $9
            WHERE account_id = $1 AND kind = $2
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.kind.id())
        .bind(account.full_name.as_str())
        .bind(account.email.as_str())
        .bind(account.password.as_str())
        .bind(account.mobile.as_ref().map(Mobile::as_str))
        .bind(account.address.as_deref())
        .bind(account.active)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    kind: i16,
    full_name: String,
    email: String,
    password_hash: String,
    mobile: Option<String>,
    address: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let kind = AccountKind::from_id(self.kind)
            .ok_or_else(|| AuthError::Internal(format!("Invalid account kind: {}", self.kind)))?;

        let password = AccountPassword::from_db(self.password_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            kind,
            full_name: FullName::from_db(self.full_name),
            email: Email::from_db(self.email),
            password,
            mobile: self.mobile.map(Mobile::from_db),
            address: self.address,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

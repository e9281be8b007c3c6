//! Server Configuration
//!
//! Read once from the process environment at startup. Nothing reads the
//! environment after this point.

use std::fmt;
use std::time::Duration;

use auth::{AuthConfig, ConfigError};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173";

#[derive(Debug, Error)]
pub enum ApiConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error(transparent)]
    Auth(#[from] ConfigError),
}

pub struct ApiConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ApiConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL").ok_or(ApiConfigError::Missing("DATABASE_URL"))?;
        let buyer_secret =
            var("JWT_USER_SECRET").ok_or(ApiConfigError::Missing("JWT_USER_SECRET"))?;
        let seller_secret =
            var("JWT_SELLER_SECRET").ok_or(ApiConfigError::Missing("JWT_SELLER_SECRET"))?;

        let mut auth = AuthConfig::new(buyer_secret, seller_secret)?
            .with_pepper(var("PASSWORD_PEPPER").map(String::into_bytes));
        if let Some(ttl) = parse_number::<u64>("TOKEN_TTL_SECS", var("TOKEN_TTL_SECS"))? {
            auth = auth.with_token_ttl(Duration::from_secs(ttl))?;
        }

        let port = parse_number("PORT", var("PORT"))?.unwrap_or(DEFAULT_PORT);
        let database_max_connections =
            parse_number("DATABASE_MAX_CONNECTIONS", var("DATABASE_MAX_CONNECTIONS"))?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            database_url,
            database_max_connections,
            port,
            frontend_origins,
            auth,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ApiConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ApiConfigError::InvalidNumber { name, value: v })
        })
        .transpose()
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("port", &self.port)
            .field("frontend_origins", &self.frontend_origins)
            .field("auth", &self.auth)
            .finish()
    }
}

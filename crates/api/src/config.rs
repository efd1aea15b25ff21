use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Runtime settings read from the process environment (and `.env`).
///
/// | Env Var                    | Default                 |
/// |----------------------------|-------------------------|
/// | `HOST`                     | `0.0.0.0`               |
/// | `PORT`                     | `8080`                  |
/// | `CORS_ORIGINS`             | `http://localhost:5173` |
/// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
/// | `DATABASE_MAX_CONNECTIONS` | `10`                    |
/// | `JWT_SECRET`               | required                |
/// | `JWT_ACCESS_EXPIRY_MINS`   | `60`                    |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub database_max_connections: u32,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// # Panics
    ///
    /// Panics when `JWT_SECRET` is missing or empty, or when a numeric
    /// variable does not parse. Startup should fail on a broken environment.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 8080),
            cors_origins: parse_origins(&env_or(
                "CORS_ORIGINS",
                "http://localhost:5173".to_string(),
            )),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10),
            jwt: JwtConfig {
                secret,
                access_token_expiry_mins: env_or("JWT_ACCESS_EXPIRY_MINS", 60),
            },
        }
    }
}

/// Parse `key` from the environment, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

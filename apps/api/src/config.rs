use std::str::FromStr;

use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub port: u16,
    pub rust_log: String,
    /// Result count when a match request gives no `limit`.
    pub default_match_limit: usize,
    /// Largest `limit` a match request may ask for.
    pub max_match_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 10)?,
            run_migrations: parse_env("RUN_MIGRATIONS", false)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_match_limit: parse_env("DEFAULT_MATCH_LIMIT", 10)?,
            max_match_limit: parse_env("MAX_MATCH_LIMIT", 100)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.max_match_limit >= 1,
            "MAX_MATCH_LIMIT must be at least 1"
        );
        ensure!(
            (1..=self.max_match_limit).contains(&self.default_match_limit),
            "DEFAULT_MATCH_LIMIT must be between 1 and MAX_MATCH_LIMIT ({})",
            self.max_match_limit
        );
        ensure!(
            self.database_max_connections >= 1,
            "DATABASE_MAX_CONNECTIONS must be at least 1"
        );
        Ok(())
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            database_max_connections: 1,
            run_migrations: false,
            port: 0,
            rust_log: "debug".to_string(),
            default_match_limit: 10,
            max_match_limit: 100,
        }
    }
}

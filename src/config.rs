// ABOUTME: Environment-driven configuration for the migration tool
// ABOUTME: Reads the database URL and log filter with local-friendly defaults

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:cinema.db?mode=rwc".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "cinema_system=info".to_string()),
        }
    }
}

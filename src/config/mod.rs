//! Configuration module for the employee API.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Which storage backend serves the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Seeded in-memory list, no persistence across restarts
    Memory,
    /// SQLite table behind the repository
    Sqlite,
}

impl StoreBackend {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Some(StoreBackend::Memory),
            "sqlite" => Some(StoreBackend::Sqlite),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend to use
    pub store: StoreBackend,
    /// Path to SQLite database file (sqlite backend only)
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let store = env::var("EMPLOYEE_STORE")
            .ok()
            .and_then(|s| StoreBackend::parse(&s))
            .unwrap_or(StoreBackend::Sqlite);

        let db_path = env::var("EMPLOYEE_DB_PATH")
            .unwrap_or_else(|_| "./data/employees.sqlite".to_string())
            .into();

        let bind_addr = env::var("EMPLOYEE_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid EMPLOYEE_BIND_ADDR format");

        let log_level = env::var("EMPLOYEE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            store,
            db_path,
            bind_addr,
            log_level,
        }
    }
}

use anyhow::{Context, Result};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PORT: u16 = 8080;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            max_connections: read_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        };
        let server = ServerConfig {
            port: read_or("PORT", DEFAULT_PORT)?,
        };
        Ok(Self { database, server })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// sqlx connection string, e.g. `sqlite://bookstore.db` or `sqlite::memory:`.
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// A private in-memory store. Pinned to one connection since every
    /// SQLite in-memory connection opens its own database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

fn read_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v
            .parse()
            .with_context(|| format!("{key} has an invalid value: {v}")),
        Err(_) => Ok(default),
    }
}

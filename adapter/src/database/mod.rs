use std::{str::FromStr, time::Duration};

use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

pub mod model;

fn make_sqlite_connect_options(cfg: &DatabaseConfig) -> AppResult<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(&cfg.url)
        .map_err(AppError::SpecificOperationError)?
        .create_if_missing(true)
        .foreign_keys(true);
    Ok(options)
}

#[derive(Clone)]
pub struct ConnectionPool(SqlitePool);

impl ConnectionPool {
    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &SqlitePool {
        &self.0
    }
}

pub fn connect_database_with(cfg: &DatabaseConfig) -> AppResult<ConnectionPool> {
    let mut pool_options = SqlitePoolOptions::new().max_connections(cfg.max_connections);
    // An in-memory database lives only as long as its connections.
    if cfg.url.contains(":memory:") {
        pool_options = pool_options
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }
    let pool = pool_options.connect_lazy_with(make_sqlite_connect_options(cfg)?);
    Ok(ConnectionPool(pool))
}

/// Applies the embedded schema migrations. Safe to call on every start-up.
pub async fn migrate(db: &ConnectionPool) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(db.inner_ref()).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn prepare_test_database() -> anyhow::Result<ConnectionPool> {
    let db = connect_database_with(&DatabaseConfig::in_memory())?;
    migrate(&db).await?;
    Ok(db)
}

//! PostgreSQL [`Store`] on top of a sqlx pool.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{ExistsQuery, Store, StoreError, Value};
use crate::config::StoreConfig;

/// Store backed by a shared [`PgPool`].
///
/// The pool is fixed at construction; clones share it.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool using `config`.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        log::info!(
            "Connecting to PostgreSQL (max_connections={}, acquire_timeout={:?})",
            config.max_connections,
            config.acquire_timeout
        );
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn fetch_exists(&self, query: &ExistsQuery) -> Result<bool, StoreError> {
        let sql = query.to_sql();
        let mut scalar = sqlx::query_scalar::<_, bool>(&sql);
        for value in query.binds() {
            scalar = match value {
                Value::Text(v) => scalar.bind(v.as_str()),
                Value::Bool(v) => scalar.bind(*v),
                Value::Int(v) => scalar.bind(*v),
            };
        }
        let exists = scalar.fetch_one(&self.pool).await?;
        Ok(exists)
    }
}

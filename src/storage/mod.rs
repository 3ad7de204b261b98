//! Player persistence: the `PlayerStore` contract and its backends.

use crate::domain::{Player, PlayerDraft, ValidationError};
use crate::infra::config::Config;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryPlayerStore;
pub use postgres::PostgresPlayerStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("player not found")]
    NotFound,

    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A collection of player documents.
///
/// Identifiers are opaque strings. Any identifier that does not name a stored
/// record, malformed or not, yields `StoreError::NotFound`.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Stores a new player, assigning its identifier and timestamps.
    async fn insert(&self, draft: PlayerDraft) -> StoreResult<Player>;

    /// Every stored player in creation order.
    async fn find_all(&self) -> StoreResult<Vec<Player>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Player>;

    /// Replaces the required fields of an existing player. Counters the draft
    /// omits keep their stored values.
    async fn replace(&self, id: &str, draft: PlayerDraft) -> StoreResult<Player>;

    /// Deletes a player and returns what was removed.
    async fn remove(&self, id: &str) -> StoreResult<Player>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

/// Opens the backend selected by the configuration: Postgres when
/// `DATABASE_URL` is set, otherwise a process-local in-memory collection.
pub async fn open(config: &Config) -> StoreResult<Arc<dyn PlayerStore>> {
    match config.database_url.as_deref() {
        Some(url) => {
            let store = PostgresPlayerStore::connect(url, config.database_max_connections).await?;
            tracing::info!("Connected to Postgres player store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, players are kept in memory only");
            Ok(Arc::new(MemoryPlayerStore::new()))
        }
    }
}

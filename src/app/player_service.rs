//! The player record service.
//!
//! Sits between the HTTP transport and a `PlayerStore`. It is responsible for:
//! 1.  Turning raw JSON drafts into validated `PlayerDraft`s before any write,
//!     so a rejected draft never reaches the store.
//! 2.  Running exactly one store operation per call.
//! 3.  Logging write outcomes.

use crate::domain::{Player, PlayerDraft};
use crate::storage::{PlayerStore, StoreError, StoreResult};
use serde_json::Value as JsonValue;
use std::sync::Arc;

#[derive(Clone)]
pub struct PlayerService {
    store: Arc<dyn PlayerStore>,
}

impl PlayerService {
    pub fn new(store: Arc<dyn PlayerStore>) -> Self {
        Self { store }
    }

    /// Validates `payload` and stores it as a new player.
    pub async fn insert(&self, payload: &JsonValue) -> StoreResult<Player> {
        let draft = PlayerDraft::from_json(payload)?;
        let player = self.store.insert(draft).await?;
        tracing::info!(id = %player.id, name = %player.name, "player created");
        Ok(player)
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Player>> {
        self.store.find_all().await
    }

    pub async fn find_by_id(&self, id: &str) -> StoreResult<Player> {
        self.store.find_by_id(id).await
    }

    /// Validates `payload`, then replaces the player named by `id`.
    ///
    /// A bad draft is reported before the identifier is looked up.
    pub async fn replace(&self, id: &str, payload: &JsonValue) -> StoreResult<Player> {
        let draft = PlayerDraft::from_json(payload)?;
        let player = self.store.replace(id, draft).await?;
        tracing::info!(id = %player.id, "player updated");
        Ok(player)
    }

    pub async fn remove(&self, id: &str) -> StoreResult<Player> {
        let player = self.store.remove(id).await?;
        tracing::info!(id = %player.id, "player deleted");
        Ok(player)
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.store.ping().await
    }
}

impl std::fmt::Debug for PlayerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerService").finish_non_exhaustive()
    }
}

/// True when the error is the caller's fault rather than the backend's.
pub fn is_client_error(err: &StoreError) -> bool {
    matches!(err, StoreError::Validation(_) | StoreError::NotFound)
}

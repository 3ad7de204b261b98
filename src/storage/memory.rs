//! In-memory player store.

use crate::domain::player::{write_timestamp, Player, PlayerDraft};
use crate::storage::{PlayerStore, StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Collection {
    /// Identifiers in creation order.
    order: Vec<String>,
    players: HashMap<String, Player>,
}

/// A `PlayerStore` held in process memory. Writers are serialized by the lock;
/// nothing survives a restart.
#[derive(Default)]
pub struct MemoryPlayerStore {
    inner: RwLock<Collection>,
}

impl MemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl PlayerStore for MemoryPlayerStore {
    async fn insert(&self, draft: PlayerDraft) -> StoreResult<Player> {
        let mut collection = self.inner.write().await;
        // v4 collisions are not a practical concern, but never reuse an id
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !collection.players.contains_key(&candidate) {
                break candidate;
            }
        };
        let player = Player::create(id.clone(), draft, write_timestamp());
        collection.order.push(id.clone());
        collection.players.insert(id, player.clone());
        Ok(player)
    }

    async fn find_all(&self) -> StoreResult<Vec<Player>> {
        let collection = self.inner.read().await;
        Ok(collection
            .order
            .iter()
            .filter_map(|id| collection.players.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Player> {
        let collection = self.inner.read().await;
        collection.players.get(id).cloned().ok_or(StoreError::NotFound)
    }

    async fn replace(&self, id: &str, draft: PlayerDraft) -> StoreResult<Player> {
        let mut collection = self.inner.write().await;
        let player = collection.players.get_mut(id).ok_or(StoreError::NotFound)?;
        player.apply(draft);
        Ok(player.clone())
    }

    async fn remove(&self, id: &str) -> StoreResult<Player> {
        let mut collection = self.inner.write().await;
        let removed = collection.players.remove(id).ok_or(StoreError::NotFound)?;
        collection.order.retain(|existing| existing != id);
        Ok(removed)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn draft(name: &str) -> PlayerDraft {
        PlayerDraft::from_json(&json!({
            "name": name,
            "position": "Forward",
            "team": "X",
            "age": 20,
            "nationality": "Y"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids_and_defaults() {
        let store = MemoryPlayerStore::new();
        let mut ids = HashSet::new();
        for i in 0..20 {
            let mut d = draft(&format!("P{i}"));
            if i % 2 == 0 {
                d.goals = Some(i);
            }
            let player = store.insert(d).await.unwrap();
            assert_eq!(player.goals, if i % 2 == 0 { i } else { 0 });
            assert_eq!(player.assists, 0);
            assert_eq!(player.created_at, player.updated_at);
            assert!(ids.insert(player.id));
        }
        assert_eq!(store.len().await, 20);
    }

    #[tokio::test]
    async fn find_all_preserves_creation_order() {
        let store = MemoryPlayerStore::new();
        for name in ["a", "b", "c"] {
            store.insert(draft(name)).await.unwrap();
        }
        let second = store.find_all().await.unwrap()[1].id.clone();
        store.remove(&second).await.unwrap();

        let names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn find_by_id_returns_inserted_record() {
        let store = MemoryPlayerStore::new();
        let inserted = store.insert(draft("A")).await.unwrap();
        let found = store.find_by_id(&inserted.id).await.unwrap();
        assert_eq!(found, inserted);
    }

    #[tokio::test]
    async fn replace_reflects_draft_and_advances_updated_at() {
        let store = MemoryPlayerStore::new();
        let inserted = store.insert(draft("A")).await.unwrap();

        let mut replacement = draft("B");
        replacement.goals = Some(5);
        let updated = store.replace(&inserted.id, replacement).await.unwrap();
        assert_eq!(updated.name, "B");
        assert_eq!(updated.goals, 5);
        assert_eq!(updated.created_at, inserted.created_at);
        assert!(updated.updated_at > inserted.updated_at);

        let found = store.find_by_id(&inserted.id).await.unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found_and_leave_collection_alone() {
        let store = MemoryPlayerStore::new();
        store.insert(draft("A")).await.unwrap();

        assert!(matches!(
            store.find_by_id("nope").await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(
            store.replace("nope", draft("B")).await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(store.remove("nope").await, Err(StoreError::NotFound)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_then_find_is_not_found() {
        let store = MemoryPlayerStore::new();
        let inserted = store.insert(draft("A")).await.unwrap();
        let removed = store.remove(&inserted.id).await.unwrap();
        assert_eq!(removed.id, inserted.id);
        assert!(matches!(
            store.find_by_id(&inserted.id).await,
            Err(StoreError::NotFound)
        ));
        assert!(store.is_empty().await);
    }
}

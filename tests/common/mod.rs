//! Shared setup: an in-process API server over a fresh in-memory store, or
//! over a store whose backend is down.
#![allow(dead_code)]

use async_trait::async_trait;
use player_registry::storage::StoreResult;
use player_registry::transport::{self, http::AppState};
use player_registry::{
    MemoryPlayerStore, Player, PlayerDraft, PlayerService, PlayerStore, StoreError,
};
use std::sync::Arc;

/// Detail carried by every `FailingStore` error. Must never reach a response.
pub const BACKEND_DETAIL: &str = "connection refused: db.internal:5432";

pub struct TestServer {
    pub base_url: String,
    pub store: Arc<MemoryPlayerStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A server whose store answers nothing but backend errors.
pub struct DownServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl DownServer {
    pub fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }
}

impl Drop for DownServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct FailingStore;

fn down<T>() -> StoreResult<T> {
    Err(StoreError::Backend(BACKEND_DETAIL.to_string()))
}

#[async_trait]
impl PlayerStore for FailingStore {
    async fn insert(&self, _draft: PlayerDraft) -> StoreResult<Player> {
        down()
    }

    async fn find_all(&self) -> StoreResult<Vec<Player>> {
        down()
    }

    async fn find_by_id(&self, _id: &str) -> StoreResult<Player> {
        down()
    }

    async fn replace(&self, _id: &str, _draft: PlayerDraft) -> StoreResult<Player> {
        down()
    }

    async fn remove(&self, _id: &str) -> StoreResult<Player> {
        down()
    }

    async fn ping(&self) -> StoreResult<()> {
        down()
    }
}

/// Serves the full app over `store` on an ephemeral port.
async fn serve(store: Arc<dyn PlayerStore>) -> (String, tokio::task::JoinHandle<()>) {
    let app_state = AppState::new(PlayerService::new(store));
    let router = transport::http::build_app(app_state, "http://localhost:3000").unwrap();

    // Bind to an ephemeral port so tests can run in parallel.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://127.0.0.1:{}", port), handle)
}

pub async fn spawn_server() -> TestServer {
    let store = Arc::new(MemoryPlayerStore::new());
    let (base_url, handle) = serve(store.clone()).await;
    TestServer {
        base_url,
        store,
        handle,
    }
}

pub async fn spawn_down_server() -> DownServer {
    let (base_url, handle) = serve(Arc::new(FailingStore)).await;
    DownServer { base_url, handle }
}

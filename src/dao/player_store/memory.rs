use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{models::PlayerRecord, player_store::PlayerStore, storage::StorageResult};

/// Player store keeping the collection in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    players: Arc<RwLock<Vec<PlayerRecord>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `players`.
    pub fn with_players(players: Vec<PlayerRecord>) -> Self {
        Self {
            players: Arc::new(RwLock::new(players)),
        }
    }

    /// Copy of the collection as currently stored.
    pub async fn snapshot(&self) -> Vec<PlayerRecord> {
        self.players.read().await.clone()
    }
}

impl PlayerStore for MemoryStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerRecord>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.snapshot().await) })
    }

    fn save(&self, players: Vec<PlayerRecord>) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            *store.players.write().await = players;
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

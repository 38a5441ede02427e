pub mod json_file;
pub mod memory;

use futures::future::BoxFuture;

use crate::dao::{models::PlayerRecord, storage::StorageResult};

/// Abstraction over the persistence layer holding the player collection.
///
/// Backends always operate on the whole collection: `load` returns every
/// record in stored order and `save` replaces the stored collection wholesale.
pub trait PlayerStore: Send + Sync {
    /// Read the full collection. A store that was never written is empty.
    fn load(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerRecord>>>;
    /// Replace the full collection.
    fn save(&self, players: Vec<PlayerRecord>) -> BoxFuture<'static, StorageResult<()>>;
    /// Check that the backend can currently serve reads.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}

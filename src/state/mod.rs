use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::{config::AppConfig, dao::player_store::PlayerStore};

pub type SharedState = Arc<AppState>;

/// Central application state holding the player store handle.
pub struct AppState {
    player_store: Arc<dyn PlayerStore>,
    mutation_gate: Mutex<()>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(player_store: Arc<dyn PlayerStore>, config: AppConfig) -> SharedState {
        Arc::new(Self {
            player_store,
            mutation_gate: Mutex::new(()),
            config,
        })
    }

    /// Handle to the installed player store.
    pub fn player_store(&self) -> Arc<dyn PlayerStore> {
        self.player_store.clone()
    }

    /// Serialize read-modify-write cycles on the player collection.
    ///
    /// Holders must keep the guard alive from the load until the save completes.
    pub async fn lock_mutations(&self) -> MutexGuard<'_, ()> {
        self.mutation_gate.lock().await
    }

    /// Runtime configuration the state was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

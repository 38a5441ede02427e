use indexmap::IndexMap;
use serde_json::Value;
use tracing::info;

use crate::{dao::models::PlayerRecord, error::ServiceError, state::SharedState};

pub const MISSING_ID_MESSAGE: &str = "Player payload must include a string \"id\" field.";
pub const DUPLICATE_ID_MESSAGE: &str = "Player with this id already exists.";
pub const NOT_FOUND_MESSAGE: &str = "Player not found";

/// Result of a create-or-merge request keyed by a path id.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    /// No record had the id; a new one was prepended.
    Created(PlayerRecord),
    /// An existing record was merged in place.
    Updated(PlayerRecord),
}

/// Return the whole collection in stored order.
pub async fn list_players(state: &SharedState) -> Result<Vec<PlayerRecord>, ServiceError> {
    Ok(state.player_store().load().await?)
}

/// Look up a single player by id.
pub async fn get_player(state: &SharedState, id: &str) -> Result<PlayerRecord, ServiceError> {
    state
        .player_store()
        .load()
        .await?
        .into_iter()
        .find(|player| player.has_id(id))
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MESSAGE.into()))
}

/// Add a new player at the front of the collection.
pub async fn create_player(
    state: &SharedState,
    fields: IndexMap<String, Value>,
) -> Result<PlayerRecord, ServiceError> {
    let player = PlayerRecord::from(fields);
    let id = match player.id() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(ServiceError::InvalidInput(MISSING_ID_MESSAGE.into())),
    };

    let store = state.player_store();
    let _gate = state.lock_mutations().await;
    let mut players = store.load().await?;
    if players.iter().any(|existing| existing.has_id(&id)) {
        return Err(ServiceError::Conflict(DUPLICATE_ID_MESSAGE.into()));
    }

    players.insert(0, player.clone());
    store.save(players).await?;
    info!(player_id = %id, "player added");

    Ok(player)
}

/// Create the player `id` from `fields`, or shallow-merge `fields` into it.
pub async fn upsert_player(
    state: &SharedState,
    id: &str,
    fields: IndexMap<String, Value>,
) -> Result<UpsertOutcome, ServiceError> {
    let store = state.player_store();
    let _gate = state.lock_mutations().await;
    let mut players = store.load().await?;

    let outcome = match players.iter_mut().find(|player| player.has_id(id)) {
        Some(existing) => {
            existing.merge(fields, id);
            UpsertOutcome::Updated(existing.clone())
        }
        None => {
            let created = PlayerRecord::with_id(fields, id);
            players.insert(0, created.clone());
            UpsertOutcome::Created(created)
        }
    };

    store.save(players).await?;
    match &outcome {
        UpsertOutcome::Created(_) => info!(player_id = %id, "player created through upsert"),
        UpsertOutcome::Updated(_) => info!(player_id = %id, "player updated"),
    }

    Ok(outcome)
}

use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Try reading the player document and report whether that worked.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let check = state.player_store().health_check().await;
    if let Err(err) = &check {
        warn!(error = %err, "player store health check failed");
    }
    HealthResponse::for_store(check.is_ok())
}

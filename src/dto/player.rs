use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{StatusCode, request::Parts},
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

use crate::{dao::models::PlayerRecord, error::AppError};

/// Response listing every stored player.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerListResponse {
    pub players: Vec<PlayerRecord>,
    /// Always equal to the length of `players`.
    pub count: usize,
}

impl From<Vec<PlayerRecord>> for PlayerListResponse {
    fn from(players: Vec<PlayerRecord>) -> Self {
        let count = players.len();
        Self { players, count }
    }
}

/// Response returned after a player was created or updated.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerMutationResponse {
    pub message: String,
    pub player: PlayerRecord,
}

impl PlayerMutationResponse {
    pub fn added(player: PlayerRecord) -> Self {
        Self::new("Player added", player)
    }

    pub fn created(player: PlayerRecord) -> Self {
        Self::new("Player created", player)
    }

    pub fn updated(player: PlayerRecord) -> Self {
        Self::new("Player updated", player)
    }

    fn new(message: &str, player: PlayerRecord) -> Self {
        Self {
            message: message.to_string(),
            player,
        }
    }
}

/// Raw player fields submitted in a request body.
///
/// An empty body reads as `{}`; anything else must be a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPayload(pub IndexMap<String, Value>);

/// Reasons a request body cannot be turned into a [`PlayerPayload`].
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Invalid JSON payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Invalid JSON payload: expected a JSON object")]
    NotAnObject,
}

impl PlayerPayload {
    /// Parse a buffered request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(Self(fields.into_iter().collect())),
            _ => Err(PayloadError::NotAnObject),
        }
    }
}

impl From<PayloadError> for AppError {
    fn from(err: PayloadError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl<S> FromRequest<S> for PlayerPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
                _ => AppError::BadRequest(format!(
                    "Invalid JSON payload: {}",
                    rejection.body_text()
                )),
            })?;

        Ok(Self::from_slice(&body)?)
    }
}

/// Player id taken from the remainder of an item path, percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerId(pub String);

impl<S> FromRequestParts<S> for PlayerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::BadRequest(format!("Invalid player id: {}", rejection.body_text()))
            })?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_body_reads_as_empty_object() {
        assert_eq!(PlayerPayload::from_slice(b"").unwrap(), PlayerPayload::default());
    }

    #[test]
    fn object_body_keeps_field_order() {
        let payload = PlayerPayload::from_slice(br#"{"name":"Ana","id":"p1"}"#).unwrap();
        let keys: Vec<_> = payload.0.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "id"]);
    }

    #[test]
    fn malformed_and_non_object_bodies_are_rejected() {
        let malformed = PlayerPayload::from_slice(b"{\"id\":").unwrap_err();
        assert!(malformed.to_string().starts_with("Invalid JSON payload"));

        let array = PlayerPayload::from_slice(b"[1, 2]").unwrap_err();
        assert!(matches!(array, PayloadError::NotAnObject));
    }

    #[test]
    fn list_response_counts_players() {
        let players = vec![
            serde_json::from_value(json!({ "id": "a" })).unwrap(),
            serde_json::from_value(json!({ "id": "b" })).unwrap(),
        ];
        let response = PlayerListResponse::from(players);
        assert_eq!(response.count, response.players.len());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "players": [{ "id": "a" }, { "id": "b" }], "count": 2 })
        );
    }
}

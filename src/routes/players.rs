use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{
        StatusCode,
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS},
    },
    response::IntoResponse,
    routing::get,
};

use crate::{
    dao::models::PlayerRecord,
    dto::player::{PlayerId, PlayerListResponse, PlayerMutationResponse, PlayerPayload},
    error::AppError,
    services::player_service::{self, UpsertOutcome},
    state::SharedState,
};

const ALLOWED_METHODS: &str = "GET,POST,PUT,PATCH,OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Routes exposing the player collection.
///
/// Item paths capture everything after `/api/players/`, so ids may contain `/`.
pub fn router(max_body_bytes: usize) -> Router<SharedState> {
    Router::new()
        .route(
            "/api/players",
            get(list_players).post(create_player).options(preflight),
        )
        .route(
            "/api/players/{*id}",
            get(get_player)
                .put(replace_player)
                .patch(patch_player)
                .options(preflight),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

/// List every stored player.
#[utoipa::path(
    get,
    path = "/api/players",
    tag = "players",
    responses(
        (status = 200, description = "All players in stored order", body = PlayerListResponse),
        (status = 500, description = "Player store unavailable", body = crate::error::ErrorBody)
    )
)]
pub async fn list_players(
    State(state): State<SharedState>,
) -> Result<Json<PlayerListResponse>, AppError> {
    let players = player_service::list_players(&state).await?;
    Ok(Json(players.into()))
}

/// Fetch one player by id.
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = "players",
    params(("id" = String, Path, description = "Identifier of the player")),
    responses(
        (status = 200, description = "Stored player", body = PlayerRecord),
        (status = 400, description = "Id is not valid UTF-8 once decoded", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown id", body = crate::error::ErrorBody)
    )
)]
pub async fn get_player(
    State(state): State<SharedState>,
    PlayerId(id): PlayerId,
) -> Result<Json<PlayerRecord>, AppError> {
    Ok(Json(player_service::get_player(&state, &id).await?))
}

/// Add a new player; the body must carry a string `id` not used yet.
#[utoipa::path(
    post,
    path = "/api/players",
    tag = "players",
    request_body = PlayerRecord,
    responses(
        (status = 201, description = "Player added", body = PlayerMutationResponse),
        (status = 400, description = "Malformed body or missing id", body = crate::error::ErrorBody),
        (status = 409, description = "Id already used", body = crate::error::ErrorBody),
        (status = 413, description = "Body too large", body = crate::error::ErrorBody)
    )
)]
pub async fn create_player(
    State(state): State<SharedState>,
    PlayerPayload(fields): PlayerPayload,
) -> Result<impl IntoResponse, AppError> {
    let player = player_service::create_player(&state, fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(PlayerMutationResponse::added(player)),
    ))
}

/// Create or merge-update the player stored under `id`.
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = "players",
    params(("id" = String, Path, description = "Identifier of the player")),
    request_body = PlayerRecord,
    responses(
        (status = 200, description = "Existing player merged", body = PlayerMutationResponse),
        (status = 201, description = "Player created", body = PlayerMutationResponse),
        (status = 400, description = "Malformed body or undecodable id", body = crate::error::ErrorBody)
    )
)]
pub async fn replace_player(
    State(state): State<SharedState>,
    PlayerId(id): PlayerId,
    payload: PlayerPayload,
) -> Result<impl IntoResponse, AppError> {
    upsert(&state, &id, payload).await
}

/// Same semantics as `PUT`: unknown ids are created, known ones merged.
#[utoipa::path(
    patch,
    path = "/api/players/{id}",
    tag = "players",
    params(("id" = String, Path, description = "Identifier of the player")),
    request_body = PlayerRecord,
    responses(
        (status = 200, description = "Existing player merged", body = PlayerMutationResponse),
        (status = 201, description = "Player created", body = PlayerMutationResponse),
        (status = 400, description = "Malformed body or undecodable id", body = crate::error::ErrorBody)
    )
)]
pub async fn patch_player(
    State(state): State<SharedState>,
    PlayerId(id): PlayerId,
    payload: PlayerPayload,
) -> Result<impl IntoResponse, AppError> {
    upsert(&state, &id, payload).await
}

async fn upsert(
    state: &SharedState,
    id: &str,
    PlayerPayload(fields): PlayerPayload,
) -> Result<(StatusCode, Json<PlayerMutationResponse>), AppError> {
    let (status, response) = match player_service::upsert_player(state, id, fields).await? {
        UpsertOutcome::Created(player) => {
            (StatusCode::CREATED, PlayerMutationResponse::created(player))
        }
        UpsertOutcome::Updated(player) => (StatusCode::OK, PlayerMutationResponse::updated(player)),
    };
    Ok((status, Json(response)))
}

/// Answer cross-origin preflight requests for the player routes.
async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
    )
}

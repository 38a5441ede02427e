use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the player roster service.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::players::list_players,
        crate::routes::players::get_player,
        crate::routes::players::create_player,
        crate::routes::players::replace_player,
        crate::routes::players::patch_player,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::StoreStatus,
            crate::dto::player::PlayerListResponse,
            crate::dto::player::PlayerMutationResponse,
            crate::dao::models::PlayerRecord,
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "players", description = "Player collection stored as a JSON document"),
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Player collection operations backing the REST endpoints.
pub mod player_service;

/// Database model definitions.
pub mod models;
/// Player collection storage and retrieval operations.
pub mod player_store;
/// Storage abstraction layer shared by every backend.
pub mod storage;

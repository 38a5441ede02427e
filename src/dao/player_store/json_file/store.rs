use std::{
    ffi::OsString,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::BoxFuture;
use indexmap::IndexMap;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use crate::dao::{models::PlayerRecord, player_store::PlayerStore, storage::StorageResult};

use super::error::{JsonFileError, JsonFileResult};

const STAGING_SUFFIX: &str = ".tmp";

/// Player store backed by a single pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Arc<Path>,
}

impl JsonFileStore {
    /// Create a store reading and writing the document at `path`.
    ///
    /// The document is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        Self {
            path: Arc::from(path),
        }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_players(&self) -> JsonFileResult<Vec<PlayerRecord>> {
        let path: &Path = &self.path;
        let contents = match fs::read(path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "players document not found; starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(JsonFileError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let document: Value =
            serde_json::from_slice(&contents).map_err(|source| JsonFileError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        match document {
            Value::Array(items) => {
                let stored = items.len();
                let players: Vec<PlayerRecord> = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Object(fields) => {
                            Some(PlayerRecord::from(fields.into_iter().collect::<IndexMap<_, _>>()))
                        }
                        _ => None,
                    })
                    .collect();

                // Skipped entries are gone from disk after the next save.
                if players.len() < stored {
                    warn!(
                        path = %path.display(),
                        skipped = stored - players.len(),
                        "ignoring players document entries that are not JSON objects"
                    );
                }
                Ok(players)
            }
            _ => {
                warn!(
                    path = %path.display(),
                    "players document is not a JSON array; treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_players(&self, players: &[PlayerRecord]) -> JsonFileResult<()> {
        let path: &Path = &self.path;
        let payload =
            serde_json::to_vec_pretty(players).map_err(|source| JsonFileError::Encode {
                path: path.to_path_buf(),
                source,
            })?;

        // Readers only ever observe the old or the new document.
        let staging = staging_path(path);
        fs::write(&staging, &payload)
            .await
            .map_err(|source| JsonFileError::Write {
                path: staging.clone(),
                source,
            })?;

        if let Err(source) = fs::rename(&staging, path).await {
            if let Err(cleanup) = fs::remove_file(&staging).await {
                warn!(path = %staging.display(), error = %cleanup, "failed to remove staging file");
            }
            return Err(JsonFileError::Replace {
                path: path.to_path_buf(),
                source,
            });
        }

        debug!(path = %path.display(), count = players.len(), "players document written");
        Ok(())
    }
}

impl PlayerStore for JsonFileStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerRecord>>> {
        let store = self.clone();
        Box::pin(async move { store.read_players().await.map_err(Into::into) })
    }

    fn save(&self, players: Vec<PlayerRecord>) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.write_players(&players).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .read_players()
                .await
                .map(|_| ())
                .map_err(Into::into)
        })
    }
}

/// Sibling path used to stage a full rewrite before it replaces `path`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("players.json"));
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn record(value: Value) -> PlayerRecord {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn missing_document_loads_as_empty_collection() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("players.json"));

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_rewrites_the_whole_document_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("players.json");
        let store = JsonFileStore::new(&path);

        store
            .save(vec![record(json!({ "id": "a", "name": "Ana" }))])
            .await
            .unwrap();
        store
            .save(vec![
                record(json!({ "id": "b" })),
                record(json!({ "id": "a", "name": "Ana" })),
            ])
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("[\n  {\n    \"id\": \"b\""));

        let loaded = store.load().await.unwrap();
        let ids: Vec<_> = loaded.iter().filter_map(PlayerRecord::id).collect();
        assert_eq!(ids, ["b", "a"]);
        assert!(!staging_path(&path).exists());
    }

    #[tokio::test]
    async fn field_order_survives_a_round_trip_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("players.json");
        let store = JsonFileStore::new(&path);
        let original = record(json!({ "zeta": 1, "id": "a", "alpha": { "b": 1, "a": 2 } }));

        store.save(vec![original.clone()]).await.unwrap();
        let reloaded = store.load().await.unwrap();
        store.save(reloaded.clone()).await.unwrap();

        assert_eq!(reloaded, vec![original]);
        let contents = std::fs::read_to_string(&path).unwrap();
        let zeta = contents.find("\"zeta\"").unwrap();
        let id = contents.find("\"id\"").unwrap();
        let nested_b = contents.find("\"b\"").unwrap();
        let nested_a = contents.find("\"a\": 2").unwrap();
        assert!(zeta < id);
        assert!(nested_b < nested_a);
    }

    #[tokio::test]
    async fn malformed_document_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(&path, "[{\"id\": ").unwrap();
        let store = JsonFileStore::new(&path);

        assert!(store.load().await.is_err());
        assert!(store.health_check().await.is_err());
    }

    #[tokio::test]
    async fn non_array_document_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(&path, "{\"id\": \"a\"}").unwrap();
        let store = JsonFileStore::new(&path);

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn entries_that_are_not_objects_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(&path, r#"[{"id": "a"}, 5, null, [1]]"#).unwrap();
        let store = JsonFileStore::new(&path);

        assert_eq!(store.load().await.unwrap(), vec![record(json!({ "id": "a" }))]);
    }

    #[tokio::test]
    async fn read_failures_name_the_backend_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);

        let err = store.load().await.unwrap_err();

        assert_eq!(err.to_string(), "player storage failed: json file");
        let detail = std::error::Error::source(&err).unwrap().to_string();
        assert!(detail.starts_with("failed to"), "{detail}");
    }

    #[tokio::test]
    async fn save_into_missing_directory_fails_without_leaving_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("players.json");
        let store = JsonFileStore::new(&path);

        assert!(store.save(Vec::new()).await.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn staging_path_is_a_sibling_of_the_document() {
        let staging = staging_path(Path::new("data/players.json"));
        assert_eq!(staging, PathBuf::from("data/players.json.tmp"));
    }
}

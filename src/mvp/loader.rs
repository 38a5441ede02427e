use std::path::PathBuf;

use reqwest::Client;
use serde_json::Value;
use tokio::fs;
use tracing::{error, info, warn};

use super::{
    error::{MvpError, MvpResult},
    model::MvpRecord,
    projection::MvpDisplay,
    surface::DisplaySurface,
};

/// Default document consulted when no source is configured.
pub const DEFAULT_MVP_SOURCE: &str = "mvp.json";

/// Where the MVP document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MvpSource {
    /// Fetched over HTTP(S).
    Remote(String),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl MvpSource {
    /// Interpret `raw` as a URL when it has an HTTP scheme, else as a path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            MvpSource::Remote(trimmed.to_string())
        } else {
            MvpSource::File(PathBuf::from(trimmed))
        }
    }

    /// Retrieve the raw document bytes.
    pub async fn fetch(&self, client: &Client) -> MvpResult<Vec<u8>> {
        match self {
            MvpSource::Remote(url) => {
                let response =
                    client
                        .get(url)
                        .send()
                        .await
                        .map_err(|source| MvpError::Request {
                            url: url.clone(),
                            source,
                        })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(MvpError::Status {
                        url: url.clone(),
                        status,
                    });
                }

                let body = response.bytes().await.map_err(|source| MvpError::Request {
                    url: url.clone(),
                    source,
                })?;
                Ok(body.to_vec())
            }
            MvpSource::File(path) => fs::read(path).await.map_err(|source| MvpError::ReadFile {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl Default for MvpSource {
    fn default() -> Self {
        MvpSource::File(PathBuf::from(DEFAULT_MVP_SOURCE))
    }
}

/// Decode the current MVP, which is the first element of the document array.
pub fn current_record(document: &[u8]) -> MvpResult<MvpRecord> {
    let document: Value =
        serde_json::from_slice(document).map_err(|source| MvpError::Decode { source })?;

    let first = match document {
        Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        _ => return Err(MvpError::Empty),
    };

    serde_json::from_value(first).map_err(|source| MvpError::Shape { source })
}

/// Fetch and decode the current MVP, logging and swallowing any failure.
pub async fn load_current_mvp(source: &MvpSource, client: &Client) -> Option<MvpRecord> {
    let result = match source.fetch(client).await {
        Ok(document) => current_record(&document),
        Err(err) => Err(err),
    };

    match result {
        Ok(record) => Some(record),
        Err(MvpError::Empty) => {
            warn!(source = ?source, "MVP document holds no record; nothing to display");
            None
        }
        Err(err) => {
            error!(source = ?source, error = %err, "failed to load MVP document");
            None
        }
    }
}

/// Load the current MVP and project it onto `surface`.
///
/// Returns whether the surface was updated; failures are only logged.
pub async fn run_once<S>(source: &MvpSource, client: &Client, surface: &mut S) -> bool
where
    S: DisplaySurface + ?Sized,
{
    let Some(record) = load_current_mvp(source, client).await else {
        return false;
    };

    match MvpDisplay::project(&record).apply_to(surface) {
        Ok(()) => {
            info!(label = %record.label, player_id = %record.player_id, "MVP display updated");
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::mvp::surface::{Region, TextSurface};

    fn sample_document() -> Value {
        json!([
            {
                "label": "Abril 2025",
                "player_id": "joao-felix",
                "club": "Benfica",
                "league": "Liga Portugal",
                "stats_window": "Abril",
                "stats": { "matches": 4, "goals": 3, "assists": 4, "minutes": 360 },
                "reason": "Criatividade no último terço."
            },
            {
                "label": "Março 2025",
                "player_id": "older-entry",
                "club": "Porto",
                "league": "Liga Portugal",
                "stats_window": "Março",
                "stats": { "matches": 1, "goals": 0, "assists": 0, "minutes": 90 },
                "reason": "Ignored."
            }
        ])
    }

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            MvpSource::parse("https://example.org/mvp.json"),
            MvpSource::Remote("https://example.org/mvp.json".into())
        );
        assert_eq!(
            MvpSource::parse("data/mvp.json"),
            MvpSource::File(PathBuf::from("data/mvp.json"))
        );
        assert_eq!(MvpSource::default(), MvpSource::parse(DEFAULT_MVP_SOURCE));
    }

    #[test]
    fn only_the_first_record_is_used() {
        let bytes = serde_json::to_vec(&sample_document()).unwrap();
        let record = current_record(&bytes).unwrap();
        assert_eq!(record.player_id, "joao-felix");
    }

    #[test]
    fn loose_stat_types_still_decode() {
        let document = json!([{
            "label": "Maio 2025",
            "player_id": "rui-costa",
            "club": "Benfica",
            "league": "Liga Portugal",
            "stats_window": "Maio",
            "stats": { "matches": "4", "goals": 2, "assists": null, "minutes": 360.0 },
            "reason": "Regularidade."
        }]);

        let record = current_record(&serde_json::to_vec(&document).unwrap()).unwrap();

        assert_eq!(record.stats.minutes, json!(360.0));
        assert_eq!(record.stats.matches, json!("4"));
    }

    #[test]
    fn empty_or_non_array_documents_are_rejected() {
        assert!(matches!(current_record(b"[]"), Err(MvpError::Empty)));
        assert!(matches!(
            current_record(br#"{"label": "x"}"#),
            Err(MvpError::Empty)
        ));
        assert!(matches!(
            current_record(b"not json"),
            Err(MvpError::Decode { .. })
        ));
        assert!(matches!(
            current_record(br#"[{"label": "x"}]"#),
            Err(MvpError::Shape { .. })
        ));
    }

    #[tokio::test]
    async fn run_once_updates_surface_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mvp.json");
        std::fs::write(&path, serde_json::to_vec(&sample_document()).unwrap()).unwrap();
        let mut surface = TextSurface::with_all_regions();

        let updated = run_once(&MvpSource::File(path), &Client::new(), &mut surface).await;

        assert!(updated);
        assert_eq!(surface.text(Region::Title), Some("MVP — Abril 2025"));
        assert_eq!(surface.text(Region::Meta), Some("joao felix · Benfica · Liga Portugal"));
    }

    #[tokio::test]
    async fn run_once_leaves_surface_alone_when_document_is_missing() {
        let dir = TempDir::new().unwrap();
        let mut surface = TextSurface::with_all_regions();

        let updated = run_once(
            &MvpSource::File(dir.path().join("absent.json")),
            &Client::new(),
            &mut surface,
        )
        .await;

        assert!(!updated);
        assert_eq!(surface, TextSurface::with_all_regions());
    }
}

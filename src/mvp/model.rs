use serde::Deserialize;
use serde_json::Value;

/// Statistics block of an MVP record.
///
/// Feeds are hand-edited, so values are kept as whatever JSON was supplied
/// (`360`, `360.0` and `"360"` all display).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MvpStats {
    pub matches: Value,
    pub goals: Value,
    pub assists: Value,
    pub minutes: Value,
}

/// Externally supplied "most valuable player" entry for a period.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MvpRecord {
    /// Period name, e.g. a month.
    pub label: String,
    /// Slug such as `first-last`.
    pub player_id: String,
    pub club: String,
    pub league: String,
    /// Human readable description of the window the stats cover.
    pub stats_window: String,
    pub stats: MvpStats,
    pub reason: String,
}

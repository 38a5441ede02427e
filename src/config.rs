//! Application-level configuration loaded from the process environment.

use std::{env, path::PathBuf};

use tracing::{info, warn};

/// Port used when [`PORT_ENV`] is unset or invalid.
pub const DEFAULT_PORT: u16 = 3000;
/// Backing document used when [`DATA_PATH_ENV`] is unset.
pub const DEFAULT_DATA_PATH: &str = "players.json";
/// Largest request body accepted by the player endpoints.
pub const DEFAULT_MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// Environment variable selecting the listening port.
const PORT_ENV: &str = "PORT";
/// Environment variable overriding [`DEFAULT_DATA_PATH`].
const DATA_PATH_ENV: &str = "PLAYERS_DATA_PATH";
/// Environment variable overriding [`DEFAULT_MAX_BODY_BYTES`].
const MAX_BODY_BYTES_ENV: &str = "PLAYERS_MAX_BODY_BYTES";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Location of the JSON document holding the player collection.
    pub data_path: PathBuf,
    /// Request body ceiling in bytes.
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load the configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());
        info!(
            port = config.port,
            data_path = %config.data_path.display(),
            max_body_bytes = config.max_body_bytes,
            "loaded configuration"
        );
        config
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset; unparsable numbers are logged and replaced
    /// by their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = read(PORT_ENV)
            .and_then(|value| parse_or_warn(PORT_ENV, &value))
            .unwrap_or(DEFAULT_PORT);
        let data_path = read(DATA_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let max_body_bytes = read(MAX_BODY_BYTES_ENV)
            .and_then(|value| parse_or_warn(MAX_BODY_BYTES_ENV, &value))
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        Self {
            port,
            data_path,
            max_body_bytes,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(variable = key, value, "ignoring invalid configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
        assert_eq!(AppConfig::default().port, 3000);
        assert_eq!(AppConfig::default().max_body_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn environment_overrides_every_field() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "8081"),
            ("PLAYERS_DATA_PATH", "/var/lib/roster/players.json"),
            ("PLAYERS_MAX_BODY_BYTES", "1024"),
        ]));

        assert_eq!(config.port, 8081);
        assert_eq!(
            config.data_path,
            PathBuf::from("/var/lib/roster/players.json")
        );
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn invalid_or_empty_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            ("PLAYERS_DATA_PATH", "  "),
            ("PLAYERS_MAX_BODY_BYTES", "-1"),
        ]));

        assert_eq!(config, AppConfig::default());
    }
}

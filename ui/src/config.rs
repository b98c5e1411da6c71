//! Application configuration.
//!
//! Defaults ship embedded from `assets/config.json`. Native builds additionally
//! look for a `config.json` in the platform config directory; any section it
//! provides replaces the embedded one. A missing override is normal, a broken
//! one is logged and ignored.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::timing::Latency;
use crate::i18n::Language;

const EMBEDDED_CONFIG: &str = include_str!("../assets/config.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Start-up language; detected from the OS/browser when absent.
    pub default_language: Option<Language>,
    pub latency: Latencies,
    pub map: MapSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Latencies {
    pub login: Latency,
    pub register: Latency,
    pub trends: Latency,
    pub prediction: Latency,
    pub valuation: Latency,
    pub forecasting: Latency,
    pub subscription: Latency,
    pub consultant: Latency,
}

impl Default for Latencies {
    fn default() -> Self {
        Self {
            login: Latency::fixed(1500),
            register: Latency::fixed(2000),
            trends: Latency::fixed(2000),
            prediction: Latency::fixed(2000),
            valuation: Latency::fixed(3000),
            forecasting: Latency::fixed(3000),
            subscription: Latency::fixed(3000),
            consultant: Latency::jittered(1500, 1000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Slippy-map template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
    pub tile_url: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
    pub center: GeoPoint,
    pub zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            subdomains: vec!["a".into(), "b".into(), "c".into()],
            attribution: "© OpenStreetMap contributors".into(),
            center: GeoPoint {
                lat: 13.75,
                lon: 100.5,
            },
            zoom: 6,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configuration bundled with the binary.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_CONFIG).unwrap_or_else(|err| {
            tracing::warn!(%err, "embedded configuration rejected; using built-in defaults");
            Self::default()
        })
    }

    /// Embedded defaults, overridden by the user's config file where one exists.
    pub fn load_or_default() -> Self {
        let embedded = Self::embedded();
        match read_override() {
            Ok(Some(user)) => {
                tracing::info!("applied user configuration override");
                embedded.merge(user)
            }
            Ok(None) => embedded,
            Err(err) => {
                tracing::warn!(%err, "ignoring configuration override");
                embedded
            }
        }
    }

    fn merge(self, user: PartialConfig) -> Self {
        Self {
            default_language: user.default_language.or(self.default_language),
            latency: user.latency.unwrap_or(self.latency),
            map: user.map.unwrap_or(self.map),
        }
    }
}

/// Override file shape: every section optional.
#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    default_language: Option<Language>,
    latency: Option<Latencies>,
    map: Option<MapSettings>,
}

/// Location of the user override file, if the platform has a config directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn override_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "ThaiPropertyAI", "ThaiPropertyAI")
        .map(|dirs| dirs.config_dir().join("config.json"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_override() -> Result<Option<PartialConfig>, ConfigError> {
    let Some(path) = override_path() else {
        return Ok(None);
    };
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Io { path, source }),
    }
}

#[cfg(target_arch = "wasm32")]
fn read_override() -> Result<Option<PartialConfig>, ConfigError> {
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_file_matches_built_in_defaults() {
        let parsed = AppConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed = AppConfig::from_json(r#"{ "default_language": "th" }"#).unwrap();
        assert_eq!(parsed.default_language, Some(Language::Th));
        assert_eq!(parsed.latency, Latencies::default());
        assert_eq!(parsed.map.zoom, 6);
    }

    #[test]
    fn override_replaces_only_the_sections_it_names() {
        let user: PartialConfig = serde_json::from_str(
            r#"{ "latency": { "login": { "base_ms": 10 } } }"#,
        )
        .unwrap();
        let merged = AppConfig::default().merge(user);
        assert_eq!(merged.latency.login, Latency::fixed(10));
        assert_eq!(merged.latency.valuation, Latency::fixed(3000));
        assert_eq!(merged.map, MapSettings::default());
        assert_eq!(merged.default_language, None);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = AppConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

//! Word lists for generated game names.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable naming a TOML word-list file.
pub const NAMES_CONFIG_ENV: &str = "ISLANDS_NAMES_CONFIG";

const DEFAULT_ADJECTIVES: &[&str] = &[
    "autumn", "hidden", "bitter", "misty", "silent", "empty", "dry", "dark", "summer", "icy",
    "quiet", "white", "cool", "spring", "winter", "patient", "twilight", "crimson", "wispy",
    "weathered", "blue", "billowing", "broken", "cold", "damp", "falling", "frosty", "green",
    "long", "late", "bold", "little", "morning", "muddy", "old", "red", "rough", "still",
    "small", "sparkling", "shy", "wandering", "withered", "wild", "black", "young", "holy",
    "solitary", "fragrant", "aged", "snowy", "proud", "floral", "restless", "divine",
    "polished", "ancient", "purple", "lively", "nameless",
];

const DEFAULT_NOUNS: &[&str] = &[
    "waterfall", "river", "breeze", "moon", "rain", "wind", "sea", "morning", "snow", "lake",
    "sunset", "pine", "shadow", "leaf", "dawn", "glitter", "forest", "hill", "cloud",
    "meadow", "sun", "glade", "bird", "brook", "butterfly", "bush", "dew", "dust", "field",
    "fire", "flower", "firefly", "feather", "grass", "haze", "mountain", "night", "pond",
    "darkness", "snowflake", "silence", "sound", "sky", "shape", "surf", "thunder",
    "violet", "water", "wildflower", "wave", "resonance", "frog", "smoke", "star", "island",
];

/// Adjective and noun lists used to build names like `bold-frog-8249`.
///
/// Both lists are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct NamesConfig {
    /// First word of a name.
    adjectives: Vec<String>,
    /// Second word of a name.
    nouns: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NamesFile {
    adjectives: Vec<String>,
    nouns: Vec<String>,
}

impl NamesConfig {
    /// Creates a config from two word lists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either list has no non-blank word.
    #[instrument(skip(adjectives, nouns))]
    pub fn new(adjectives: Vec<String>, nouns: Vec<String>) -> Result<Self, ConfigError> {
        let clean = |words: Vec<String>| -> Vec<String> {
            words
                .into_iter()
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty())
                .collect()
        };
        let adjectives = clean(adjectives);
        let nouns = clean(nouns);

        if adjectives.is_empty() {
            return Err(ConfigError::new("adjective list is empty"));
        }
        if nouns.is_empty() {
            return Err(ConfigError::new("noun list is empty"));
        }

        debug!(
            adjectives = adjectives.len(),
            nouns = nouns.len(),
            "Name lists ready"
        );
        Ok(Self { adjectives, nouns })
    }

    /// Parses `adjectives = [...]` and `nouns = [...]` from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or empty lists.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: NamesFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Self::new(file.adjectives, file.nouns)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading name lists from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            adjectives = config.adjectives.len(),
            nouns = config.nouns.len(),
            "Name lists loaded"
        );
        Ok(config)
    }

    /// Loads from `path` if given, else from `ISLANDS_NAMES_CONFIG`, else
    /// falls back to the built-in lists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a named file cannot be loaded.
    #[instrument(skip(path))]
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var(NAMES_CONFIG_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) => {
                debug!("Using built-in name lists");
                Ok(Self::default())
            }
        }
    }
}

impl Default for NamesConfig {
    fn default() -> Self {
        let owned =
            |words: &[&str]| -> Vec<String> { words.iter().map(|w| (*w).to_string()).collect() };
        Self {
            adjectives: owned(DEFAULT_ADJECTIVES),
            nouns: owned(DEFAULT_NOUNS),
        }
    }
}

//! Round and court catalog configuration.
//!
//! A [`ScheduleConfig`] fixes the bracket shape (ordered round names) and
//! the court list (whose length is the per-round capacity). It is built
//! once and handed to every index explicitly, so tournaments with
//! different shapes can be scheduled side by side.
//!
//! # File format
//!
//! ```json
//! { "rounds": ["Pool A", "Pool B", "Final"], "courts": ["North", "South"] }
//! ```
//!
//! Either key may be omitted; the missing catalog falls back to the
//! bitballs default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Catalog, CatalogError};

/// Bitballs round names, in bracket order.
pub const DEFAULT_ROUNDS: [&str; 9] = [
    "Round 1",
    "Round 2",
    "Round 3",
    "Round 4",
    "Round 5",
    "Elimination",
    "Quarter Finals",
    "Semi Finals",
    "Championship",
];

/// Bitballs court names.
pub const DEFAULT_COURTS: [&str; 4] = ["1", "2", "3", "4"];

/// Errors raised while building a [`ScheduleConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Config document is not valid JSON for this schema.
    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Round list is empty or has duplicates.
    #[error("invalid round catalog: {0}")]
    Rounds(#[source] CatalogError),
    /// Court list is empty or has duplicates.
    #[error("invalid court catalog: {0}")]
    Courts(#[source] CatalogError),
}

/// Immutable round + court catalogs for one tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleConfig {
    rounds: Catalog,
    courts: Catalog,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    rounds: Option<Vec<String>>,
    courts: Option<Vec<String>>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            rounds: Catalog::from_static(&DEFAULT_ROUNDS),
            courts: Catalog::from_static(&DEFAULT_COURTS),
        }
    }
}

impl ScheduleConfig {
    /// Builds a config from explicit round and court lists.
    pub fn new<R, C, S, T>(rounds: R, courts: C) -> Result<Self, ConfigError>
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Ok(Self {
            rounds: Catalog::new(rounds).map_err(ConfigError::Rounds)?,
            courts: Catalog::new(courts).map_err(ConfigError::Courts)?,
        })
    }

    /// Parses a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let defaults = Self::default();

        let rounds = match raw.rounds {
            Some(names) => Catalog::new(names).map_err(ConfigError::Rounds)?,
            None => defaults.rounds,
        };
        let courts = match raw.courts {
            Some(names) => Catalog::new(names).map_err(ConfigError::Courts)?,
            None => defaults.courts,
        };

        Ok(Self { rounds, courts })
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            rounds = config.rounds.len(),
            courts = config.courts.len(),
            "loaded schedule config"
        );
        Ok(config)
    }

    /// Round catalog, in bracket order.
    pub fn rounds(&self) -> &Catalog {
        &self.rounds
    }

    /// Court catalog.
    pub fn courts(&self) -> &Catalog {
        &self.courts
    }

    /// Games a single round can hold (one per court).
    #[inline]
    pub fn court_capacity(&self) -> usize {
        self.courts.len()
    }
}

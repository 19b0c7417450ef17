//! Round and court scheduling for bitballs tournaments.
//!
//! Takes the flat list of games a tournament already has and answers the
//! questions the scheduling screens ask: which games sit in which round
//! and court, how full each round is, and where a new game can still go.
//!
//! # Modules
//!
//! - **`models`**: `Game` records and ordered `Catalog`s of names
//! - **`config`**: `ScheduleConfig`, the round and court catalogs of one tournament
//! - **`scheduler`**: `ScheduleIndex` (grouping + availability), `ScheduleCache`,
//!   `OccupancySummary`
//! - **`validation`**: Opt-in strict checks (duplicate IDs, slot conflicts,
//!   unknown names) that the index itself tolerates
//!
//! # Example
//!
//! ```
//! use bitballs_schedule::{Game, ScheduleConfig, ScheduleIndex};
//!
//! let games = vec![
//!     Game::new("1", "Round 1", "1"),
//!     Game::new("2", "Round 1", "2"),
//! ];
//! let index = ScheduleIndex::build(&games, &ScheduleConfig::default());
//!
//! assert_eq!(index.game_count("Round 1"), 2);
//! assert_eq!(index.available_courts("Round 1"), vec!["3", "4"]);
//! assert_eq!(index.available_rounds()[0], "Round 1");
//! ```

pub mod config;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::{ConfigError, ScheduleConfig};
pub use models::{Catalog, CatalogError, Game};
pub use scheduler::{group_by_round, OccupancySummary, RoundBucket, ScheduleCache, ScheduleIndex};

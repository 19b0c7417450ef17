//! Occupancy summary.
//!
//! Aggregate fill figures for a schedule index, used for the standings
//! header and for spotting data that falls outside the catalogs.
//!
//! | Figure | Definition |
//! |--------|-----------|
//! | Total games | Distinct filled slots, all rounds |
//! | Open slots | Σ over catalog rounds of max(0, capacity − occupancy) |
//! | Full rounds | Catalog rounds at or over capacity |
//! | Fill rate | occupancy / capacity, per catalog round |

use std::collections::{BTreeSet, HashMap};

use super::ScheduleIndex;

/// Fill figures for one index.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancySummary {
    /// Distinct filled slots across every round, known or not.
    pub total_games: usize,
    /// Slots still open across catalog rounds.
    pub open_slots: usize,
    /// Catalog rounds with no room left, in catalog order.
    pub full_rounds: Vec<String>,
    /// Fill rate (0.0..) per catalog round.
    pub fill_rate_by_round: HashMap<String, f64>,
    /// Round names present in the data but not in the catalog, sorted.
    pub unknown_rounds: Vec<String>,
    /// Court names present in the data but not in the catalog, sorted.
    pub unknown_courts: Vec<String>,
}

impl OccupancySummary {
    /// Computes the summary for `index`.
    pub fn calculate(index: &ScheduleIndex) -> Self {
        let config = index.config();
        let capacity = config.court_capacity();

        let mut open_slots = 0;
        let mut full_rounds = Vec::new();
        let mut fill_rate_by_round = HashMap::new();

        for round in config.rounds().iter() {
            let count = index.game_count(round);
            open_slots += capacity.saturating_sub(count);
            if count >= capacity {
                full_rounds.push(round.to_string());
            }
            fill_rate_by_round.insert(round.to_string(), count as f64 / capacity as f64);
        }

        let mut unknown_rounds = BTreeSet::new();
        let mut unknown_courts = BTreeSet::new();
        for (round, bucket) in index.buckets() {
            if !config.rounds().contains(round) {
                unknown_rounds.insert(round.clone());
            }
            for court in bucket.courts() {
                if !config.courts().contains(court) {
                    unknown_courts.insert(court.to_string());
                }
            }
        }

        Self {
            total_games: index.total_games(),
            open_slots,
            full_rounds,
            fill_rate_by_round,
            unknown_rounds: unknown_rounds.into_iter().collect(),
            unknown_courts: unknown_courts.into_iter().collect(),
        }
    }

    /// Whether every catalog slot is filled.
    pub fn is_complete(&self) -> bool {
        self.open_slots == 0
    }

    /// Whether all games use catalog names.
    pub fn is_clean(&self) -> bool {
        self.unknown_rounds.is_empty() && self.unknown_courts.is_empty()
    }
}

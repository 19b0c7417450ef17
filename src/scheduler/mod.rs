//! Schedule index, cache, and occupancy figures.
//!
//! # Algorithm
//!
//! `group_by_round` makes one pass over the games, bucketing by round and
//! keying each bucket by court. Availability queries then walk the round
//! and court catalogs in order, so results follow bracket order no matter
//! how the games were created.
//!
//! # Caching
//!
//! `ScheduleCache` holds the games and rebuilds the index lazily after any
//! mutation. Invalidation is an explicit call, not a subscription.

mod cache;
mod index;
mod occupancy;

pub use cache::ScheduleCache;
pub use index::{group_by_round, RoundBucket, ScheduleIndex};
pub use occupancy::OccupancySummary;

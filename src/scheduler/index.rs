//! Round/court schedule index.
//!
//! Groups a flat game collection by round, then by court, and answers
//! which rounds and courts can still take a new game.
//!
//! # Tolerance
//! The index never rejects input. Two games in the same round + court
//! resolve last-write-wins, and names outside the catalogs get their own
//! buckets but are never offered as available. Strict checks live in
//! [`crate::validation`].

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::config::ScheduleConfig;
use crate::models::Game;

/// Games of one round, keyed by court.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundBucket {
    /// Number of distinct courts filled.
    occupancy: usize,
    /// Court name → game in that court.
    slots: BTreeMap<String, Game>,
}

impl RoundBucket {
    /// Number of distinct courts holding a game.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.occupancy
    }

    /// Game on the given court, if any.
    pub fn game(&self, court: &str) -> Option<&Game> {
        self.slots.get(court)
    }

    /// Filled court names, sorted by name.
    pub fn courts(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Games in this round, sorted by court name.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.slots.values()
    }

    /// Stores `game` in its court, replacing any earlier occupant.
    fn place(&mut self, game: &Game) {
        match self.slots.insert(game.court.clone(), game.clone()) {
            None => self.occupancy += 1,
            Some(previous) => tracing::trace!(
                round = %game.round,
                court = %game.court,
                replaced = %previous.id,
                by = %game.id,
                "slot overwritten by later game"
            ),
        }
    }
}

/// Groups games by round, then court.
///
/// Games are visited in iteration order. A round bucket exists iff at
/// least one game names that round. The occupancy count only grows the
/// first time a court is seen in a round, so a later duplicate replaces
/// the earlier game without being counted twice.
pub fn group_by_round<'a, I>(games: I) -> HashMap<String, RoundBucket>
where
    I: IntoIterator<Item = &'a Game>,
{
    let mut rounds: HashMap<String, RoundBucket> = HashMap::new();
    for game in games {
        rounds.entry(game.round.clone()).or_default().place(game);
    }
    rounds
}

/// Derived round → court → game view over a game collection.
///
/// Rebuilt from scratch by [`ScheduleIndex::build`]; never mutated in
/// place. Use [`super::ScheduleCache`] to keep one alive across reads.
///
/// Serializes as `{"rounds": {...}}` with rounds in display order
/// (see [`ScheduleIndex::rounds_in_order`]) and courts sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleIndex {
    config: ScheduleConfig,
    rounds: HashMap<String, RoundBucket>,
}

impl ScheduleIndex {
    /// Groups `games` under the catalogs of `config`.
    pub fn build<'a, I>(games: I, config: &ScheduleConfig) -> Self
    where
        I: IntoIterator<Item = &'a Game>,
    {
        let rounds = group_by_round(games);
        tracing::debug!(
            rounds = rounds.len(),
            games = rounds.values().map(RoundBucket::occupancy).sum::<usize>(),
            "built schedule index"
        );
        Self {
            config: config.clone(),
            rounds,
        }
    }

    /// Catalogs this index answers against.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Bucket for `round`, if any game names it.
    pub fn round(&self, round: &str) -> Option<&RoundBucket> {
        self.rounds.get(round)
    }

    /// Raw grouping, keyed by round name.
    pub fn buckets(&self) -> &HashMap<String, RoundBucket> {
        &self.rounds
    }

    /// Distinct courts filled in `round`; 0 for a round with no games.
    pub fn game_count(&self, round: &str) -> usize {
        self.rounds.get(round).map_or(0, RoundBucket::occupancy)
    }

    /// Game in the `round` + `court` slot.
    pub fn game(&self, round: &str, court: &str) -> Option<&Game> {
        self.rounds.get(round).and_then(|bucket| bucket.game(court))
    }

    /// Whether the slot is empty.
    pub fn is_slot_open(&self, round: &str, court: &str) -> bool {
        self.game(round, court).is_none()
    }

    /// Catalog rounds with fewer games than there are courts.
    ///
    /// Always in catalog order, regardless of the order games were
    /// created in. Exclusion is count-based: a round holding four games
    /// on off-catalog courts is still full.
    pub fn available_rounds(&self) -> Vec<&str> {
        let capacity = self.config.court_capacity();
        self.config
            .rounds()
            .iter()
            .filter(|round| self.game_count(round) < capacity)
            .collect()
    }

    /// Catalog courts with no game in `round`, in catalog order.
    pub fn available_courts(&self, round: &str) -> Vec<&str> {
        self.config
            .courts()
            .iter()
            .filter(|court| self.is_slot_open(round, court))
            .collect()
    }

    /// First open slot: earliest available round, then its first free court.
    pub fn next_open_slot(&self) -> Option<(&str, &str)> {
        self.available_rounds().into_iter().find_map(|round| {
            self.available_courts(round)
                .first()
                .map(|&court| (round, court))
        })
    }

    /// Buckets ordered for display: catalog rounds first in bracket
    /// order, then unknown rounds by name.
    pub fn rounds_in_order(&self) -> Vec<(&str, &RoundBucket)> {
        let mut ordered: Vec<(&str, &RoundBucket)> = self
            .rounds
            .iter()
            .map(|(name, bucket)| (name.as_str(), bucket))
            .collect();
        let catalog = self.config.rounds();
        ordered.sort_by(|a, b| catalog.compare(a.0, b.0));
        ordered
    }

    /// Total filled slots across all rounds.
    pub fn total_games(&self) -> usize {
        self.rounds.values().map(RoundBucket::occupancy).sum()
    }

    /// Whether no game has been placed.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

struct OrderedRounds<'a>(&'a ScheduleIndex);

impl Serialize for OrderedRounds<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.rounds_in_order())
    }
}

impl Serialize for ScheduleIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScheduleIndex", 1)?;
        state.serialize_field("rounds", &OrderedRounds(self))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, round: &str, court: &str) -> Game {
        Game::new(id, round, court)
    }

    fn index(games: &[Game]) -> ScheduleIndex {
        ScheduleIndex::build(games, &ScheduleConfig::default())
    }

    fn all_rounds() -> Vec<&'static str> {
        crate::config::DEFAULT_ROUNDS.to_vec()
    }

    #[test]
    fn test_partial_round() {
        let games = vec![game("a", "Round 1", "1"), game("b", "Round 1", "2")];
        let idx = index(&games);

        assert_eq!(idx.game_count("Round 1"), 2);
        assert_eq!(idx.available_courts("Round 1"), vec!["3", "4"]);
        // 2 < 4, and every untouched round is at 0
        assert_eq!(idx.available_rounds(), all_rounds());
    }

    #[test]
    fn test_full_round_excluded() {
        let games: Vec<Game> = ["1", "2", "3", "4"]
            .iter()
            .map(|c| game(&format!("g{c}"), "Round 1", c))
            .collect();
        let idx = index(&games);

        let available = idx.available_rounds();
        assert!(!available.contains(&"Round 1"));
        assert_eq!(available, all_rounds()[1..].to_vec());
        assert!(idx.available_courts("Round 1").is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let idx = index(&[]);
        assert!(idx.is_empty());
        assert_eq!(idx.available_rounds(), all_rounds());
        assert_eq!(idx.available_courts("Round 1"), vec!["1", "2", "3", "4"]);
        assert_eq!(idx.game_count("Round 1"), 0);
        assert!(idx.game("Round 1", "1").is_none());
        assert_eq!(idx.next_open_slot(), Some(("Round 1", "1")));
    }

    #[test]
    fn test_duplicate_slot_last_write_wins() {
        // Tolerated: two games on one slot are not reported, the later one is kept.
        let games = vec![game("first", "Round 1", "1"), game("second", "Round 1", "1")];
        let idx = index(&games);

        assert_eq!(idx.game_count("Round 1"), 1);
        assert_eq!(idx.game("Round 1", "1").map(|g| g.id.as_str()), Some("second"));
        assert_eq!(idx.total_games(), 1);
    }

    #[test]
    fn test_round_order_ignores_insertion_order() {
        let games = vec![
            game("a", "Championship", "1"),
            game("b", "Elimination", "1"),
            game("c", "Round 3", "1"),
        ];
        let idx = index(&games);
        assert_eq!(idx.available_rounds(), all_rounds());

        let order: Vec<&str> = idx.rounds_in_order().into_iter().map(|(r, _)| r).collect();
        assert_eq!(order, vec!["Round 3", "Elimination", "Championship"]);
    }

    #[test]
    fn test_unknown_names_tolerated() {
        let games = vec![
            game("a", "Round 99", "1"),
            game("b", "Round 1", "Court 7"),
            game("c", "Bonus", "2"),
        ];
        let idx = index(&games);

        assert_eq!(idx.game_count("Round 99"), 1);
        assert!(idx.game("Round 1", "Court 7").is_some());
        assert!(!idx.available_rounds().contains(&"Round 99"));
        assert!(!idx.available_courts("Round 1").contains(&"Court 7"));
        assert_eq!(idx.available_courts("Round 1"), vec!["1", "2", "3", "4"]);

        let order: Vec<&str> = idx.rounds_in_order().into_iter().map(|(r, _)| r).collect();
        assert_eq!(order, vec!["Round 1", "Bonus", "Round 99"]);
    }

    #[test]
    fn test_full_by_count_on_off_catalog_courts() {
        let games = vec![
            game("a", "Round 1", "1"),
            game("b", "Round 1", "5"),
            game("c", "Round 1", "6"),
            game("d", "Round 1", "7"),
        ];
        let idx = index(&games);

        assert!(!idx.available_rounds().contains(&"Round 1"));
        assert_eq!(idx.available_courts("Round 1"), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_next_open_slot() {
        let games = vec![
            game("a", "Round 1", "1"),
            game("b", "Round 1", "2"),
            game("c", "Round 1", "3"),
            game("d", "Round 2", "1"),
        ];
        let idx = index(&games);
        assert_eq!(idx.next_open_slot(), Some(("Round 1", "4")));

        let config = ScheduleConfig::new(["R1", "R2"], ["1", "2"]).unwrap();
        // every slot taken
        let games = vec![
            game("a", "R1", "1"),
            game("b", "R1", "2"),
            game("c", "R2", "1"),
            game("d", "R2", "2"),
        ];
        let idx = ScheduleIndex::build(&games, &config);
        assert_eq!(idx.next_open_slot(), None);

        // off-catalog court still counts toward capacity
        let games = vec![game("a", "R1", "1"), game("b", "R1", "X")];
        let idx = ScheduleIndex::build(&games, &config);
        assert_eq!(idx.available_rounds(), vec!["R2"]);
        assert_eq!(idx.next_open_slot(), Some(("R2", "1")));
    }

    #[test]
    fn test_custom_capacity() {
        let config = ScheduleConfig::new(["Heat", "Final"], ["North", "South"]).unwrap();
        let games = vec![game("a", "Heat", "South"), game("b", "Heat", "North")];
        let idx = ScheduleIndex::build(&games, &config);

        assert_eq!(idx.available_rounds(), vec!["Final"]);
        assert_eq!(idx.available_courts("Final"), vec!["North", "South"]);
        assert_eq!(idx.next_open_slot(), Some(("Final", "North")));
    }

    #[test]
    fn test_serialized_grouping() {
        let games = vec![game("a", "Round 1", "2")];
        let idx = index(&games);
        let value = serde_json::to_value(&idx).unwrap();

        assert_eq!(value["rounds"]["Round 1"]["occupancy"], 1);
        assert_eq!(value["rounds"]["Round 1"]["slots"]["2"]["id"], "a");
        assert!(value.get("config").is_none());
    }

    #[test]
    fn test_serialized_grouping_is_ordered() {
        let games = vec![
            game("a", "Championship", "3"),
            game("b", "Bonus", "1"),
            game("c", "Round 1", "4"),
            game("d", "Elimination", "2"),
            game("e", "Round 1", "1"),
        ];
        let json = serde_json::to_string(&index(&games)).unwrap();

        let at = |needle: &str| json.find(needle).unwrap();
        assert!(at("\"Round 1\"") < at("\"Elimination\""));
        assert!(at("\"Elimination\"") < at("\"Championship\""));
        assert!(at("\"Championship\"") < at("\"Bonus\""));
        // courts within Round 1
        assert!(at("\"id\":\"e\"") < at("\"id\":\"c\""));

        let mut reversed = games.clone();
        reversed.reverse();
        assert_eq!(json, serde_json::to_string(&index(&reversed)).unwrap());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        fn arb_game() -> impl Strategy<Value = Game> {
            let rounds = prop::sample::select(vec![
                "Round 1",
                "Round 2",
                "Elimination",
                "Championship",
                "Exhibition",
            ]);
            let courts = prop::sample::select(vec!["1", "2", "3", "4", "5"]);
            (0u32..1000, rounds, courts)
                .prop_map(|(id, round, court)| Game::new(format!("g{id}"), round, court))
        }

        proptest! {
            #[test]
            fn every_game_lands_in_its_slot_unless_overwritten(
                games in prop::collection::vec(arb_game(), 0..40)
            ) {
                let idx = index(&games);
                for (i, g) in games.iter().enumerate() {
                    let stored = idx.game(&g.round, &g.court);
                    prop_assert!(stored.is_some());
                    let overwritten = games[i + 1..]
                        .iter()
                        .any(|later| later.occupies(&g.round, &g.court));
                    if !overwritten {
                        prop_assert_eq!(stored, Some(g));
                    }
                }
                let rounds: HashSet<&str> = games.iter().map(|g| g.round.as_str()).collect();
                prop_assert_eq!(idx.buckets().len(), rounds.len());
            }

            #[test]
            fn occupancy_counts_distinct_courts(
                games in prop::collection::vec(arb_game(), 0..40)
            ) {
                let idx = index(&games);
                for (round, bucket) in idx.buckets() {
                    let courts: HashSet<&str> = games
                        .iter()
                        .filter(|g| &g.round == round)
                        .map(|g| g.court.as_str())
                        .collect();
                    prop_assert_eq!(bucket.occupancy(), courts.len());
                }
            }

            #[test]
            fn occupancy_bounded_for_catalog_courts(
                games in prop::collection::vec(arb_game(), 0..40)
            ) {
                let games: Vec<Game> = games.into_iter().filter(|g| g.court != "5").collect();
                let idx = index(&games);
                for bucket in idx.buckets().values() {
                    prop_assert!(bucket.occupancy() <= 4);
                }
            }

            #[test]
            fn available_courts_complement_occupied(
                games in prop::collection::vec(arb_game(), 0..40)
            ) {
                let idx = index(&games);
                let catalog: HashSet<&str> = idx.config().courts().iter().collect();
                for round in idx.config().rounds().iter() {
                    let free: HashSet<&str> = idx.available_courts(round).into_iter().collect();
                    let taken: HashSet<&str> = catalog
                        .iter()
                        .copied()
                        .filter(|c| idx.game(round, c).is_some())
                        .collect();
                    prop_assert!(free.is_disjoint(&taken));
                    let union: HashSet<&str> = free.union(&taken).copied().collect();
                    prop_assert_eq!(union, catalog.clone());
                }
            }

            #[test]
            fn available_rounds_follow_catalog_order(
                mut games in prop::collection::vec(arb_game(), 0..40)
            ) {
                let forward = index(&games).available_rounds()
                    .into_iter().map(String::from).collect::<Vec<_>>();
                games.reverse();
                let backward = index(&games).available_rounds()
                    .into_iter().map(String::from).collect::<Vec<_>>();

                let config = ScheduleConfig::default();
                let positions: Vec<usize> = forward
                    .iter()
                    .filter_map(|r| config.rounds().position(r))
                    .collect();
                prop_assert_eq!(positions.len(), forward.len());
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
                // membership depends only on the set of filled slots
                prop_assert_eq!(forward, backward);
            }

            #[test]
            fn rebuild_is_idempotent(
                games in prop::collection::vec(arb_game(), 0..40)
            ) {
                prop_assert_eq!(index(&games), index(&games));
            }
        }
    }
}

//! Game model.
//!
//! A game is a single match placed into one slot of the tournament grid:
//! a round (bracket stage) and a court (playing surface). Only the slot
//! fields matter to scheduling; the rest is carried so records coming
//! from the game service can be deserialized as-is.

use serde::{Deserialize, Serialize};

/// A scheduled game.
///
/// Field names on the wire follow the game service records
/// (`tournamentId`, `homeTeamId`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Unique game identifier.
    pub id: String,
    /// Owning tournament, if known.
    #[serde(default)]
    pub tournament_id: Option<String>,
    /// Round name (expected to come from the round catalog).
    pub round: String,
    /// Court name (expected to come from the court catalog).
    pub court: String,
    /// Home team, if assigned.
    #[serde(default)]
    pub home_team_id: Option<String>,
    /// Away team, if assigned.
    #[serde(default)]
    pub away_team_id: Option<String>,
    /// Video link, stored verbatim.
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Game {
    /// Creates a game in the given round and court.
    pub fn new(id: impl Into<String>, round: impl Into<String>, court: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tournament_id: None,
            round: round.into(),
            court: court.into(),
            home_team_id: None,
            away_team_id: None,
            video_url: None,
        }
    }

    /// Sets the owning tournament.
    pub fn with_tournament(mut self, tournament_id: impl Into<String>) -> Self {
        self.tournament_id = Some(tournament_id.into());
        self
    }

    /// Sets both teams.
    pub fn with_teams(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home_team_id = Some(home.into());
        self.away_team_id = Some(away.into());
        self
    }

    /// Sets the video link.
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// Team ids that are assigned, home first.
    pub fn team_ids(&self) -> Vec<&str> {
        self.home_team_id
            .iter()
            .chain(self.away_team_id.iter())
            .map(String::as_str)
            .collect()
    }

    /// Whether this game sits in the given round + court slot.
    #[inline]
    pub fn occupies(&self, round: &str, court: &str) -> bool {
        self.round == round && self.court == court
    }
}

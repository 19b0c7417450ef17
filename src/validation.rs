//! Strict checks for game collections and new placements.
//!
//! The schedule index tolerates anything. This module is the opt-in
//! layer that reports what the index silently absorbs:
//! - Duplicate game IDs
//! - Two games in the same round + court (the index keeps the later one)
//! - Round names outside the round catalog
//! - Court names outside the court catalog
//!
//! `validate_placement` guards the "create game" control: it accepts a
//! round + court only if both are catalog names, the round is under
//! capacity, and the slot is free. It agrees with
//! `ScheduleIndex::available_rounds` / `available_courts` in both
//! directions.

use std::collections::{HashMap, HashSet};

use crate::config::ScheduleConfig;
use crate::models::Game;
use crate::scheduler::ScheduleIndex;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two games share the same ID.
    DuplicateId,
    /// Two games claim the same round + court.
    SlotConflict,
    /// Round name is not in the round catalog.
    UnknownRound,
    /// Court name is not in the court catalog.
    UnknownCourt,
    /// Target slot already holds a game.
    SlotTaken,
    /// Round already holds as many games as there are courts.
    RoundFull,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a game collection against the catalogs.
///
/// Checks:
/// 1. No duplicate game IDs
/// 2. No two games in one round + court
/// 3. Every round is a catalog round
/// 4. Every court is a catalog court
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_games(games: &[Game], config: &ScheduleConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    let mut slots: HashMap<(&str, &str), &str> = HashMap::new();

    for game in games {
        if !ids.insert(game.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate game ID: {}", game.id),
            ));
        }

        let slot = (game.round.as_str(), game.court.as_str());
        if let Some(first) = slots.insert(slot, game.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotConflict,
                format!(
                    "Games '{}' and '{}' are both in {} on court {}",
                    first, game.id, game.round, game.court
                ),
            ));
        }

        if !config.rounds().contains(&game.round) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRound,
                format!("Game '{}' has unknown round '{}'", game.id, game.round),
            ));
        }

        if !config.courts().contains(&game.court) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCourt,
                format!("Game '{}' has unknown court '{}'", game.id, game.court),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(
            games = games.len(),
            errors = errors.len(),
            "game collection failed validation"
        );
        Err(errors)
    }
}

/// Checks that a new game may be placed in `round` on `court`.
pub fn validate_placement(
    index: &ScheduleIndex,
    round: &str,
    court: &str,
) -> Result<(), ValidationError> {
    let config = index.config();

    if !config.rounds().contains(round) {
        return Err(ValidationError::new(
            ValidationErrorKind::UnknownRound,
            format!("Unknown round '{round}'"),
        ));
    }
    if !config.courts().contains(court) {
        return Err(ValidationError::new(
            ValidationErrorKind::UnknownCourt,
            format!("Unknown court '{court}'"),
        ));
    }
    let count = index.game_count(round);
    if count >= config.court_capacity() {
        return Err(ValidationError::new(
            ValidationErrorKind::RoundFull,
            format!(
                "{round} already holds {count} of {} games",
                config.court_capacity()
            ),
        ));
    }
    if let Some(existing) = index.game(round, court) {
        return Err(ValidationError::new(
            ValidationErrorKind::SlotTaken,
            format!("{round} court {court} already holds game '{}'", existing.id),
        ));
    }

    Ok(())
}

//! Scheduling domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | Game | One match, placed in a round + court slot |
//! | Catalog | Ordered list of round or court names |

mod catalog;
mod game;

pub use catalog::{Catalog, CatalogError};
pub use game::Game;

//! The Fertile Crescent: three civilizations and twelve historical events.
//!
//! - Sumérios, Acádios and Fenícios, each with different starting resources
//! - Events drawn at random each turn, some restricted to one civilization
//! - The game is won at 100% civilization progress
//!
//! Timeline and lore notes are exposed as static reference data.

mod civilizations;
mod events;
mod game;
pub mod timeline;

pub use civilizations::civilizations;
pub use events::{achievements, events};
pub use game::CrescentGame;
pub use timeline::{lore, LoreNote, TimelineEntry, LORE, TIMELINE};

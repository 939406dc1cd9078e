//! Ordered event table.
//!
//! Unlike the civilization registry, order matters here: the session
//! stores an absolute index into the table, and index 0 is the event a
//! new game opens with.

use crate::civilizations::CivilizationId;
use crate::core::error::{GameError, Result};
use crate::core::RandomSource;

use super::event::Event;

/// Ordered list of event definitions.
#[derive(Clone, Debug, Default)]
pub struct EventTable {
    events: Vec<Event>,
}

impl EventTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    ///
    /// Panics on a duplicate id, an event without choices or with more than
    /// three, or a second final event.
    pub fn push(&mut self, event: Event) {
        if self.index_of(&event.id).is_some() {
            panic!("Event {} already registered", event.id);
        }
        assert!(
            (1..=3).contains(&event.choices.len()),
            "Event {} must have 1-3 choices",
            event.id
        );
        if event.final_event {
            assert!(self.final_index().is_none(), "Only one final event is allowed");
        }
        self.events.push(event);
    }

    /// Get an event by absolute index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Absolute index of an event id.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    /// Get an event by id.
    pub fn find(&self, id: &str) -> Result<&Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| GameError::UnknownEvent(id.to_string()))
    }

    /// Index of the terminal victory event.
    #[must_use]
    pub fn final_index(&self) -> Option<usize> {
        self.events.iter().position(|e| e.final_event)
    }

    /// Absolute indices of events that may be drawn for a civilization.
    pub fn selectable(
        &self,
        civilization: Option<CivilizationId>,
    ) -> impl Iterator<Item = usize> + '_ {
        self.events
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.selectable_for(civilization))
            .map(|(i, _)| i)
    }

    /// Draw a random selectable event, uniformly.
    ///
    /// Returns the absolute index, or `None` if nothing is selectable.
    pub fn draw(
        &self,
        civilization: Option<CivilizationId>,
        rng: &mut dyn RandomSource,
    ) -> Option<usize> {
        let pool: Vec<usize> = self.selectable(civilization).collect();
        if pool.is_empty() {
            return None;
        }
        Some(pool[rng.pick(pool.len())])
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}

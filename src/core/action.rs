//! Actions: the state-transition inputs of the turn controller.
//!
//! The presentation layer turns clicks into `Action`s and feeds them to
//! the reducer. Recorded actions plus the RNG seed replay a game exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::civilizations::CivilizationId;

/// A player input.
///
/// ## Example
///
/// ```
/// use fertile_crescent::civilizations::CivilizationId;
/// use fertile_crescent::core::Action;
///
/// let script = [
///     Action::SelectCivilization(CivilizationId::Sumerios),
///     Action::StartGame,
///     Action::Choose(0),
///     Action::NextEvent,
/// ];
/// assert_eq!(script[2].to_string(), "Choose(0)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Pick a civilization on the selection screen.
    SelectCivilization(CivilizationId),
    /// Begin a game with the selected civilization.
    StartGame,
    /// Resolve the choice at this index of the current event.
    Choose(usize),
    /// Dismiss the last result and draw the next event.
    NextEvent,
    /// Abandon the game and return to civilization selection.
    Restart,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SelectCivilization(id) => write!(f, "SelectCivilization({id})"),
            Action::StartGame => f.write_str("StartGame"),
            Action::Choose(index) => write!(f, "Choose({index})"),
            Action::NextEvent => f.write_str("NextEvent"),
            Action::Restart => f.write_str("Restart"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Resolved choices before this action.
    pub turn: u32,

    /// Position in the history.
    pub sequence: usize,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, turn: u32, sequence: usize) -> Self {
        Self {
            action,
            turn,
            sequence,
        }
    }
}

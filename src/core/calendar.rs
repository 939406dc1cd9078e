//! In-game calendar: a four-season cycle and a year counter.
//!
//! Every resolved choice advances one season. The year advances once,
//! when the cycle wraps back to spring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four seasons, in cycle order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[default]
    Primavera,
    Verao,
    Outono,
    Inverno,
}

impl Season {
    /// All seasons in cycle order.
    pub const CYCLE: [Season; 4] = [
        Season::Primavera,
        Season::Verao,
        Season::Outono,
        Season::Inverno,
    ];

    /// Position in the cycle (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Season::Primavera => 0,
            Season::Verao => 1,
            Season::Outono => 2,
            Season::Inverno => 3,
        }
    }

    /// The following season, wrapping after winter.
    #[must_use]
    pub const fn next(self) -> Season {
        Season::CYCLE[(self.index() + 1) % Season::CYCLE.len()]
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Season::Primavera => "Primavera",
            Season::Verao => "Verão",
            Season::Outono => "Outono",
            Season::Inverno => "Inverno",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Year and season of the running game.
///
/// Years are signed: negative values are before the common era.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Calendar {
    pub year: i32,
    pub season: Season,
}

impl Calendar {
    /// Start a calendar in spring of `year`.
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self {
            year,
            season: Season::Primavera,
        }
    }

    /// Advance one season.
    ///
    /// Returns true if a new year started.
    pub fn advance(&mut self) -> bool {
        self.season = self.season.next();
        let wrapped = self.season == Season::Primavera;
        if wrapped {
            self.year += 1;
        }
        wrapped
    }

    /// Year formatted as "3000 a.C." / "150 d.C.".
    #[must_use]
    pub fn year_label(&self) -> String {
        if self.year < 0 {
            format!("{} a.C.", self.year.unsigned_abs())
        } else {
            format!("{} d.C.", self.year)
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.season, self.year_label())
    }
}

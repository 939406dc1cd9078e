//! Resource model: the four counters every civilization manages.
//!
//! ## Floors
//!
//! Losses clamp at a per-resource floor instead of going negative:
//! - Population: 1 (a civilization never dies out)
//! - Grain, wood, gold: 0
//!
//! Paying a `Cost` never clamps. Callers check `can_afford` first and
//! take the penalty branch when it fails.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the four tracked resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Food for the people.
    Grain,
    /// Building material.
    Wood,
    /// Wealth and trade.
    Gold,
    /// Size of the civilization.
    Population,
}

impl ResourceKind {
    /// All kinds in display order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Grain,
        ResourceKind::Wood,
        ResourceKind::Gold,
        ResourceKind::Population,
    ];

    /// Lowest value a loss can push this resource to.
    #[must_use]
    pub const fn floor(self) -> u32 {
        match self {
            ResourceKind::Population => 1,
            _ => 0,
        }
    }

    /// Short description shown next to the counter.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            ResourceKind::Grain => "Grãos - Alimento para seu povo",
            ResourceKind::Wood => "Madeira - Material de construção",
            ResourceKind::Gold => "Ouro - Riqueza e comércio",
            ResourceKind::Population => "Pessoas - População da sua civilização",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Grain => "grãos",
            ResourceKind::Wood => "madeira",
            ResourceKind::Gold => "ouro",
            ResourceKind::Population => "pessoas",
        };
        f.write_str(name)
    }
}

/// The four resource counters of a civilization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources {
    pub grain: u32,
    pub wood: u32,
    pub gold: u32,
    pub population: u32,
}

impl Resources {
    /// Create a resource record.
    #[must_use]
    pub const fn new(grain: u32, wood: u32, gold: u32, population: u32) -> Self {
        Self {
            grain,
            wood,
            gold,
            population,
        }
    }

    /// Get a counter by kind.
    #[must_use]
    pub fn get(&self, kind: ResourceKind) -> u32 {
        self[kind]
    }

    /// Check whether every component of `cost` is covered.
    #[must_use]
    pub fn can_afford(&self, cost: &Cost) -> bool {
        cost.iter().all(|(kind, amount)| self[kind] >= amount)
    }

    /// Deduct a cost.
    ///
    /// Returns false and leaves the counters untouched if it is not affordable.
    pub fn pay(&mut self, cost: &Cost) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        for (kind, amount) in cost.iter() {
            self[kind] -= amount;
        }
        true
    }

    /// Add to a counter.
    pub fn gain(&mut self, kind: ResourceKind, amount: u32) {
        self[kind] = self[kind].saturating_add(amount);
    }

    /// Subtract from a counter, clamping at the kind's floor.
    pub fn lose(&mut self, kind: ResourceKind, amount: u32) {
        self[kind] = self[kind].saturating_sub(amount).max(kind.floor());
    }
}

impl Index<ResourceKind> for Resources {
    type Output = u32;

    fn index(&self, kind: ResourceKind) -> &Self::Output {
        match kind {
            ResourceKind::Grain => &self.grain,
            ResourceKind::Wood => &self.wood,
            ResourceKind::Gold => &self.gold,
            ResourceKind::Population => &self.population,
        }
    }
}

impl IndexMut<ResourceKind> for Resources {
    fn index_mut(&mut self, kind: ResourceKind) -> &mut Self::Output {
        match kind {
            ResourceKind::Grain => &mut self.grain,
            ResourceKind::Wood => &mut self.wood,
            ResourceKind::Gold => &mut self.gold,
            ResourceKind::Population => &mut self.population,
        }
    }
}

/// A bundle of required resources, e.g. "3 wood and 2 grain".
///
/// SmallVec keeps the common one- or two-resource costs inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    parts: SmallVec<[(ResourceKind, u32); 2]>,
}

impl Cost {
    /// An empty cost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cost of a single resource.
    #[must_use]
    pub fn of(kind: ResourceKind, amount: u32) -> Self {
        Self::new().and(kind, amount)
    }

    /// Add another component. Repeated kinds accumulate.
    #[must_use]
    pub fn and(mut self, kind: ResourceKind, amount: u32) -> Self {
        if let Some(part) = self.parts.iter_mut().find(|(k, _)| *k == kind) {
            part.1 += amount;
        } else {
            self.parts.push((kind, amount));
        }
        self
    }

    /// Required amount of one resource (0 if not part of the cost).
    #[must_use]
    pub fn amount(&self, kind: ResourceKind) -> u32 {
        self.parts
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, amount)| *amount)
    }

    /// Iterate over `(kind, amount)` components.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, u32)> + '_ {
        self.parts.iter().copied()
    }

    /// Check if the cost is free.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|(_, amount)| *amount == 0)
    }
}

//! Civilization system: identifiers, definitions, and registry.
//!
//! ## Key Types
//!
//! - `CivilizationId`: One of the three playable peoples
//! - `Civilization`: Static display data and starting resources
//! - `CivilizationRegistry`: Lookup by identifier
//!
//! Special abilities are text only. Their mechanical effect lives in the
//! civilization-conditional branches of individual event choices.

pub mod definition;
pub mod registry;

pub use definition::{Civilization, CivilizationId};
pub use registry::CivilizationRegistry;

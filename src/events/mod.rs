//! Event system: definitions and the ordered event table.
//!
//! ## Key Types
//!
//! - `Event`: A narrative prompt offering 1-3 choices
//! - `Choice`: A labelled option bound to a `Resolution`
//! - `EventTable`: Ordered event list with civilization-aware selection
//!
//! Events may be restricted to one civilization. Exactly one event in a
//! table is final (the victory screen) and is never drawn at random.

pub mod event;
pub mod table;

pub use event::{Choice, Event};
pub use table::EventTable;

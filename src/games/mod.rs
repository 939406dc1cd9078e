//! Game implementations.

pub mod crescent;

//! Step definitions for synchronisation pipeline scenarios.

mod given;
mod then;
mod when;
pub mod world;

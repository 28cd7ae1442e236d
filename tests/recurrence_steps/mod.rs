//! Step definitions for recurrence evaluation scenarios.

mod given;
mod then;
mod when;
pub mod world;

//! Recurring task definitions and the sources that supply them.
//!
//! A task definition names a recurring series (`teamId` + `autoTaskName`),
//! its recurrence rule, and the opaque issue fields forwarded to the tracker
//! when a new occurrence is created. Definitions are rebuilt from their
//! source on every run. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;

//! Issue tracker integration.
//!
//! The tracker is the only memory the system has: past occurrences are
//! found by querying it and new occurrences are created in it. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`] (Linear GraphQL, in-memory)

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;

//! Autotask: recurring Linear issues from declarative task definitions.
//!
//! A run loads the task definitions, then for each one finds the most
//! recent matching issue in the tracker, decides whether a new occurrence
//! is due today and creates it if so. The tracker is the only state: no
//! local database or run history is kept, so running twice on the same
//! calendar day creates nothing the second time.
//!
//! # Architecture
//!
//! Autotask follows hexagonal architecture principles:
//!
//! - **Domain**: Pure recurrence and definition logic with no I/O
//! - **Ports**: Trait interfaces for the definition source and issue tracker
//! - **Adapters**: JSON file, Linear GraphQL and in-memory implementations
//!
//! # Modules
//!
//! - [`schedule`]: Recurrence rules and the due-date decision
//! - [`definition`]: Task definitions and where they are loaded from
//! - [`tracker`]: Issue lookup and creation
//! - [`sync`]: The per-run synchronisation pipeline
//! - [`config`]: Command-line and environment configuration
//! - [`logging`]: Tracing subscriber set-up

pub mod config;
pub mod definition;
pub mod logging;
pub mod schedule;
pub mod sync;
pub mod tracker;

#[cfg(test)]
mod test_support;

//! Synchronisation pipeline.
//!
//! For every task definition, in declaration order, the pipeline locates
//! the most recent occurrence in the tracker, decides whether a new one is
//! due today and creates it when it is. Each definition yields exactly one
//! outcome; the aggregated [`domain::SyncReport`] decides whether the run
//! succeeded.
//!
//! - Outcome, policy and report types in [`domain`]
//! - Locator and pipeline orchestration in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;

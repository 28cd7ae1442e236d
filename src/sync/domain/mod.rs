//! Domain types for synchronisation runs.

mod error;
mod ids;
mod options;
mod outcome;
mod policy;
mod report;

pub use error::RunError;
pub use ids::SyncRunId;
pub use options::SyncOptions;
pub use outcome::{DefinitionReport, SyncFailure, SyncOutcome};
pub use policy::{FailurePolicy, ParseFailurePolicyError};
pub use report::SyncReport;

//! Application services for synchronisation runs.

mod locator;
mod pipeline;

pub use locator::OccurrenceLocator;
pub use pipeline::SyncService;

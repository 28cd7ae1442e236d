//! Adapter implementations for the issue tracker port.

pub mod linear;
pub mod memory;

pub use linear::{LINEAR_API_URL, LinearClient, LinearOptions};
pub use memory::InMemoryIssueTracker;

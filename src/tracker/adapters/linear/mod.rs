//! Linear GraphQL adapter for the issue tracker port.
//!
//! Talks to the Linear API over HTTPS with a personal API key. Both
//! operations are single GraphQL requests; there is no retry and no
//! pagination because at most one issue is ever requested.

mod client;
mod graphql;

pub use client::{LINEAR_API_URL, LinearClient, LinearOptions};

//! Domain model for tracker queries and issue creation.

mod issue;

pub use issue::{IssueDraft, IssueQuery, IssueRecord};

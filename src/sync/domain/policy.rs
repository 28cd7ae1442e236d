//! Failure handling policy.

use std::fmt;
use thiserror::Error;

/// How a run reacts when one definition fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Process every definition and aggregate failures.
    #[default]
    Isolate,
    /// Stop at the first failed definition. Always runs sequentially.
    AbortOnFirstError,
}

impl FailurePolicy {
    /// Returns the canonical name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Isolate => "isolate",
            Self::AbortOnFirstError => "abort",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown failure policy name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown failure policy '{0}', expected 'isolate' or 'abort'")]
pub struct ParseFailurePolicyError(pub String);

impl TryFrom<&str> for FailurePolicy {
    type Error = ParseFailurePolicyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "isolate" => Ok(Self::Isolate),
            "abort" | "abort-on-first-error" => Ok(Self::AbortOnFirstError),
            _ => Err(ParseFailurePolicyError(value.to_owned())),
        }
    }
}

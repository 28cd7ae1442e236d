//! Identity values for recurring task series.

use super::DefinitionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tracker team that owns the recurring series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamId(String);

impl TeamId {
    /// Creates a validated team identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionDomainError::EmptyTeamId`] if the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DefinitionDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(DefinitionDomainError::EmptyTeamId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamId {
    type Error = DefinitionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamId> for String {
    fn from(value: TeamId) -> Self {
        value.0
    }
}

impl AsRef<str> for TeamId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable name used to recognise past occurrences of a series.
///
/// The tracker is searched for issues whose title contains this name,
/// ignoring case, and new occurrences are created with it as their title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AutoTaskName(String);

impl AutoTaskName {
    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionDomainError::EmptyAutoTaskName`] if the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DefinitionDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(DefinitionDomainError::EmptyAutoTaskName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name folded for case-insensitive comparison.
    #[must_use]
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl TryFrom<String> for AutoTaskName {
    type Error = DefinitionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AutoTaskName> for String {
    fn from(value: AutoTaskName) -> Self {
        value.0
    }
}

impl AsRef<str> for AutoTaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AutoTaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

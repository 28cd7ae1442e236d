//! Run configuration.
//!
//! Command-line flags, with environment fallbacks, are parsed into [`Cli`]
//! and validated into a [`RunConfig`]. The Linear API key is an explicit
//! value handed to the tracker constructor; nothing below the binary reads
//! the process environment.

use crate::definition::adapters::file::DEFAULT_DEFINITIONS_PATH;
use crate::schedule::domain::RecurrenceEvaluator;
use crate::sync::domain::{FailurePolicy, ParseFailurePolicyError, SyncOptions};
use crate::tracker::adapters::{LINEAR_API_URL, LinearOptions};
use camino::Utf8PathBuf;
use chrono::FixedOffset;
use clap::{Parser, ValueEnum};
use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the Linear personal API key.
pub const API_KEY_ENV: &str = "LINEAR_PERSONAL_API_KEY";

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No API key was supplied.
    #[error(
        "unable to find {API_KEY_ENV}; make sure to add it as a secret in your repository's GitHub Action settings"
    )]
    MissingApiKey,

    /// The API key is empty after trimming.
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// The UTC offset is not of the form `±HH:MM`.
    #[error("invalid UTC offset '{0}', expected a value such as +02:00 or -05:30")]
    InvalidUtcOffset(String),
}

/// Linear personal API key.
///
/// `Debug` output is redacted so the key never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the secret value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Command-line interface of the `autotask` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "autotask",
    version,
    about = "Creates recurring Linear issues from task definitions"
)]
pub struct Cli {
    /// Linear personal API key.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path of the JSON task definition document.
    #[arg(long, env = "AUTOTASK_DEFINITIONS", default_value = DEFAULT_DEFINITIONS_PATH)]
    pub definitions: Utf8PathBuf,

    /// Linear GraphQL endpoint.
    #[arg(long, env = "LINEAR_API_URL", default_value = LINEAR_API_URL)]
    pub endpoint: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// What to do when one definition fails: `isolate` or `abort`.
    #[arg(long, default_value = "isolate", value_parser = parse_failure_policy)]
    pub failure_policy: FailurePolicy,

    /// Maximum number of definitions processed at once.
    #[arg(long, default_value = "1")]
    pub concurrency: NonZeroUsize,

    /// Reference UTC offset used to decide calendar dates.
    #[arg(
        long,
        default_value = "+00:00",
        allow_hyphen_values = true,
        value_parser = parse_utc_offset
    )]
    pub utc_offset: FixedOffset,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Validates the parsed flags into a run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] or
    /// [`ConfigError::EmptyApiKey`] when no usable key was supplied.
    pub fn into_config(self) -> Result<RunConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingApiKey)
            .and_then(ApiKey::new)?;
        Ok(RunConfig {
            api_key,
            definitions: self.definitions,
            endpoint: self.endpoint,
            timeout: Duration::from_secs(self.timeout_secs),
            failure_policy: self.failure_policy,
            concurrency: self.concurrency,
            utc_offset: self.utc_offset,
            log_format: self.log_format,
        })
    }
}

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Linear API key.
    pub api_key: ApiKey,
    /// Task definition document path.
    pub definitions: Utf8PathBuf,
    /// Linear GraphQL endpoint.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Failure handling policy.
    pub failure_policy: FailurePolicy,
    /// Maximum concurrently processed definitions.
    pub concurrency: NonZeroUsize,
    /// Reference UTC offset.
    pub utc_offset: FixedOffset,
    /// Log output format.
    pub log_format: LogFormat,
}

impl RunConfig {
    /// Returns the Linear connection options.
    #[must_use]
    pub fn linear_options(&self) -> LinearOptions {
        LinearOptions::default()
            .with_endpoint(self.endpoint.clone())
            .with_timeout(self.timeout)
    }

    /// Returns the sync pipeline options.
    #[must_use]
    pub const fn sync_options(&self) -> SyncOptions {
        SyncOptions::new(RecurrenceEvaluator::new(self.utc_offset))
            .with_failure_policy(self.failure_policy)
            .with_concurrency(self.concurrency)
    }
}

fn parse_failure_policy(raw: &str) -> Result<FailurePolicy, ParseFailurePolicyError> {
    FailurePolicy::try_from(raw)
}

/// Parses a UTC offset of the form `±HH:MM`, or `Z` / `UTC`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUtcOffset`] for any other input or an
/// offset of a day or more.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidUtcOffset(raw.to_owned());
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let mut chars = trimmed.chars();
    let sign = match chars.next() {
        Some('+') => 1,
        Some('-') => -1,
        _ => return Err(invalid()),
    };
    let (raw_hours, raw_minutes) = chars.as_str().split_once(':').ok_or_else(invalid)?;
    let hours = parse_offset_component(raw_hours, 23).ok_or_else(invalid)?;
    let minutes = parse_offset_component(raw_minutes, 59).ok_or_else(invalid)?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

fn parse_offset_component(value: &str, max: i32) -> Option<i32> {
    let well_formed = value.len() == 2 && value.chars().all(|c| c.is_ascii_digit());
    if !well_formed {
        return None;
    }
    value.parse().ok().filter(|parsed| *parsed <= max)
}

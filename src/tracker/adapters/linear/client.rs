//! HTTP client for the Linear GraphQL endpoint.

use super::graphql::{
    CREATE_ISSUE_MUTATION, GraphQlRequest, GraphQlResponse, IssueCreateData, IssuesData,
    LATEST_ISSUE_QUERY, latest_issue_variables,
};
use crate::config::ApiKey;
use crate::tracker::{
    domain::{IssueDraft, IssueQuery, IssueRecord},
    ports::{IssueTracker, TrackerError, TrackerResult},
};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

/// Public Linear GraphQL endpoint.
pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

/// Connection options for [`LinearClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearOptions {
    endpoint: String,
    timeout: Duration,
}

impl LinearOptions {
    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Sets the GraphQL endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for LinearOptions {
    fn default() -> Self {
        Self {
            endpoint: LINEAR_API_URL.to_owned(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

/// Linear issue tracker adapter.
///
/// The API key is injected at construction and sent verbatim in the
/// `Authorization` header, as Linear expects for personal keys.
#[derive(Debug, Clone)]
pub struct LinearClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: ApiKey,
}

impl LinearClient {
    /// Creates a client for the public Linear endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Transport`] when the HTTP client cannot be
    /// initialised.
    pub fn new(api_key: ApiKey) -> TrackerResult<Self> {
        Self::with_options(api_key, &LinearOptions::default())
    }

    /// Creates a client with explicit connection options.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Transport`] when the HTTP client cannot be
    /// initialised.
    pub fn with_options(api_key: ApiKey, options: &LinearOptions) -> TrackerResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout())
            .user_agent(concat!("autotask/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TrackerError::transport)?;
        Ok(Self {
            http,
            endpoint: options.endpoint().to_owned(),
            api_key,
        })
    }

    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> TrackerResult<T> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.api_key.expose())
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(classify)?;
        let status = response.status();
        let body = response.text().await.map_err(classify)?;

        if !status.is_success() {
            if let Some(messages) = graphql_error_messages(&body) {
                return Err(TrackerError::Api(messages));
            }
            return Err(TrackerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse<T> =
            serde_json::from_str(&body).map_err(|err| TrackerError::Decode(err.to_string()))?;
        if !envelope.errors.is_empty() {
            return Err(TrackerError::Api(
                envelope.errors.into_iter().map(|err| err.message).collect(),
            ));
        }
        envelope
            .data
            .ok_or_else(|| TrackerError::Decode("response contained no data".to_owned()))
    }
}

/// Extracts GraphQL error messages from a non-success response body.
fn graphql_error_messages(body: &str) -> Option<Vec<String>> {
    let envelope: GraphQlResponse<Value> = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = envelope.errors.into_iter().map(|err| err.message).collect();
    (!messages.is_empty()).then_some(messages)
}

fn classify(err: reqwest::Error) -> TrackerError {
    if err.is_timeout() {
        TrackerError::Timeout
    } else if err.is_decode() {
        TrackerError::Decode(err.to_string())
    } else {
        TrackerError::transport(err)
    }
}

#[async_trait]
impl IssueTracker for LinearClient {
    async fn query_latest_issue(&self, query: &IssueQuery) -> TrackerResult<Option<IssueRecord>> {
        let data: IssuesData = self
            .execute(LATEST_ISSUE_QUERY, latest_issue_variables(query))
            .await?;
        let latest = data.issues.nodes.into_iter().next();
        debug!(
            team_id = %query.team_id(),
            title = query.title_contains(),
            found = latest.is_some(),
            "queried latest issue"
        );
        Ok(latest)
    }

    async fn create_issue(&self, draft: &IssueDraft) -> TrackerResult<IssueRecord> {
        let data: IssueCreateData = self
            .execute(CREATE_ISSUE_MUTATION, json!({ "input": draft.to_input() }))
            .await?;
        match data.issue_create.issue {
            Some(issue) if data.issue_create.success => Ok(issue),
            _ => Err(TrackerError::Rejected),
        }
    }
}

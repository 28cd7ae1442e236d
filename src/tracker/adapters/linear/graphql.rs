//! GraphQL documents and response envelopes for the Linear API.

use crate::tracker::domain::{IssueQuery, IssueRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Newest issue in a team whose title contains a substring.
pub(super) const LATEST_ISSUE_QUERY: &str = r"query LatestIssue($filter: IssueFilter) {
  issues(filter: $filter, first: 1, orderBy: createdAt) {
    nodes { id identifier title url createdAt }
  }
}";

/// Issue creation mutation.
pub(super) const CREATE_ISSUE_MUTATION: &str = r"mutation CreateIssue($input: IssueCreateInput!) {
  issueCreate(input: $input) {
    success
    issue { id identifier title url createdAt }
  }
}";

#[derive(Debug, Serialize)]
pub(super) struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct IssuesData {
    pub issues: IssueConnection,
}

#[derive(Debug, Deserialize)]
pub(super) struct IssueConnection {
    pub nodes: Vec<IssueRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IssueCreateData {
    pub issue_create: IssuePayload,
}

#[derive(Debug, Deserialize)]
pub(super) struct IssuePayload {
    pub success: bool,
    pub issue: Option<IssueRecord>,
}

/// Builds the `IssueFilter` variables for a latest-issue query.
pub(super) fn latest_issue_variables(query: &IssueQuery) -> Value {
    json!({
        "filter": {
            "title": { "containsIgnoreCase": query.title_contains() },
            "team": { "id": { "eq": query.team_id().as_str() } }
        }
    })
}

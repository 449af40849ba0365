//! # Jira Issue Endpoints
//!
//! Creating and deleting Jira issues.

use reqwest::{Method, StatusCode};
use tracing::info;

use crate::client::{JiraClient, expect_status, read_json};
use crate::error::Result;
use crate::models::{CreateIssueRequest, CreatedIssue, IssueKey};

impl JiraClient {
  /// Create an issue and return its key.
  ///
  /// `description` is plain text; it is sent as a one-paragraph Atlassian
  /// Document Format document.
  pub async fn create_issue(
    &self,
    project_key: &str,
    summary: &str,
    description: &str,
    issue_type: &str,
  ) -> Result<IssueKey> {
    let payload = serde_json::to_value(CreateIssueRequest::new(project_key, summary, description, issue_type))?;

    let response = self.send(Method::POST, "/issue", &[], Some(&payload)).await?;
    let response = expect_status(response, StatusCode::CREATED).await?;

    let created: CreatedIssue = read_json(response).await?;
    info!(issue = %created.key, project = project_key, "Created Jira issue");
    Ok(created.key)
  }

  /// Delete an issue. Returns `true` once Jira confirms the deletion.
  pub async fn delete_issue(&self, issue_key: &IssueKey) -> Result<bool> {
    let path = format!("/issue/{issue_key}");

    let response = self.send(Method::DELETE, &path, &[], None).await?;
    expect_status(response, StatusCode::NO_CONTENT).await?;

    info!(issue = %issue_key, "Deleted Jira issue");
    Ok(true)
  }
}

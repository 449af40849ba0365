use reqwest::{Method, StatusCode};
use tracing::info;

use crate::client::{JiraClient, expect_status, read_json, to_json_strings};
use crate::error::Result;
use crate::models::{IssueKey, TransitionId, TransitionList, TransitionRef, TransitionRequest};

impl JiraClient {
  /// Get available transitions for an issue, one JSON document per transition.
  ///
  /// Transition fields are expanded, so each element carries `id`, `name`, the
  /// destination status under `to`, and the transition screen's `fields`.
  pub async fn get_issue_transitions(&self, issue_key: &IssueKey) -> Result<Vec<String>> {
    let path = format!("/issue/{issue_key}/transitions");
    let query = [("expand", "transitions.fields".to_string())];

    let response = self.send(Method::GET, &path, &query, None).await?;
    let response = expect_status(response, StatusCode::OK).await?;

    let list: TransitionList = read_json(response).await?;
    to_json_strings(&list.transitions)
  }

  /// Transition an issue to a new status
  pub async fn transition_issue(&self, issue_key: &IssueKey, transition_id: &TransitionId) -> Result<bool> {
    let path = format!("/issue/{issue_key}/transitions");
    let payload = serde_json::to_value(TransitionRequest {
      transition: TransitionRef {
        id: transition_id.clone(),
      },
    })?;

    let response = self.send(Method::POST, &path, &[], Some(&payload)).await?;
    expect_status(response, StatusCode::NO_CONTENT).await?;

    info!(issue = %issue_key, transition = %transition_id, "Transitioned Jira issue");
    Ok(true)
  }
}

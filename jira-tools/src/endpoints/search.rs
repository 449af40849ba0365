use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::client::{JiraClient, expect_status, read_json, to_json_strings};
use crate::error::Result;
use crate::models::SearchResults;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_MAX_RESULTS: u32 = 50;

const SEARCH_FIELDS: &str = "summary,status,issuetype";

impl JiraClient {
  /// List issues in a project, one JSON document per issue.
  ///
  /// Each element carries `key` and `fields.{summary,status,issuetype}` in the
  /// order Jira returned them. `max_results` is forwarded to Jira unchanged
  /// and defaults to [`DEFAULT_MAX_RESULTS`].
  pub async fn list_project_issues(&self, project_key: &str, max_results: Option<u32>) -> Result<Vec<String>> {
    let max_results = max_results.unwrap_or(DEFAULT_MAX_RESULTS);
    let query = [
      ("jql", format!("project = \"{project_key}\"")),
      ("maxResults", max_results.to_string()),
      ("fields", SEARCH_FIELDS.to_string()),
      ("validateQuery", "strict".to_string()),
    ];

    let response = self.send(Method::GET, "/search", &query, None).await?;
    let response = expect_status(response, StatusCode::OK).await?;

    let results: SearchResults = read_json(response).await?;
    debug!(project = project_key, count = results.issues.len(), "Listed Jira issues");
    to_json_strings(&results.issues)
  }
}

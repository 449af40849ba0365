//! Parameter structs for issue tools.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateIssueParams {
  /// The project key where the issue will be created (e.g. "PROJ").
  pub project_key: String,
  /// The issue summary/title.
  pub summary: String,
  /// The issue description, as plain text.
  pub description: String,
  /// The type of issue (e.g. "Bug", "Task", "Story").
  pub issue_type: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteIssueParams {
  /// The issue key to delete (e.g. "PROJ-123").
  pub issue_key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListProjectIssuesParams {
  /// The project key to list issues from.
  pub project_key: String,
  /// Maximum number of issues to return. Defaults to 50.
  #[serde(default)]
  pub max_results: Option<u32>,
}

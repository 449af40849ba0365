use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TransitionIssueParams {
  /// The issue key (e.g. "PROJ-123").
  pub issue_key: String,
  /// The ID of the transition to perform, as listed by `get_issue_transitions`.
  pub transition_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetIssueTransitionsParams {
  /// The issue key (e.g. "PROJ-123").
  pub issue_key: String,
}

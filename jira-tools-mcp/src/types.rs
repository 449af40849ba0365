//! Tool result shapes.
//!
//! Successful calls return plain text content: a single value, or one JSON
//! document per item for list tools. Failures return a JSON error envelope
//! with a machine-readable code and `is_error` set.

use jira_tools::JiraError;
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Build a successful result with one text item per entry, in order.
pub fn text_result<I>(items: I) -> CallToolResult
where
  I: IntoIterator<Item = String>,
{
  let content = items.into_iter().map(Content::text).collect();
  let mut result = CallToolResult::success(content);
  result.is_error = Some(false);
  result
}

/// Consistent error shape returned by all tools.
#[derive(Debug, Serialize)]
pub struct ToolError {
  pub code: String,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hint: Option<String>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename = "error")]
struct ErrorEnvelope<'a> {
  error: &'a ToolError,
}

impl ToolError {
  /// Serialize to a `CallToolResult` with `is_error` set.
  pub fn to_call_tool_result(&self) -> CallToolResult {
    let json = serde_json::to_string(&ErrorEnvelope { error: self }).unwrap_or_else(|e| {
      format!(r#"{{"status":"error","error":{{"code":"internal","message":"Serialization failed: {e}"}}}}"#)
    });
    let mut result = CallToolResult::error(vec![Content::text(json)]);
    result.is_error = Some(true);
    result
  }

  /// Tool failures are reported in-band, never as protocol errors.
  pub fn into_result(self) -> Result<CallToolResult, McpError> {
    Ok(self.to_call_tool_result())
  }
}

impl From<&JiraError> for ToolError {
  fn from(err: &JiraError) -> Self {
    let hint = match err {
      JiraError::MissingConfig => Some("Set JIRA_BASE_URL, JIRA_EMAIL and JIRA_API_TOKEN, then restart the server."),
      JiraError::Transport(_) => Some("Check JIRA_BASE_URL and network connectivity."),
      JiraError::Unauthorized => Some("Check JIRA_EMAIL and JIRA_API_TOKEN."),
      JiraError::Forbidden => Some("The account lacks permission for this project or issue."),
      JiraError::NotFound => Some("Verify the project key or issue key."),
      JiraError::RateLimited => Some("Wait before calling Jira again."),
      JiraError::Api { .. }
      | JiraError::UnexpectedStatus(_)
      | JiraError::Decode(_)
      | JiraError::Runtime(_) => None,
    };

    Self {
      code: err.code().to_string(),
      message: err.to_string(),
      hint: hint.map(str::to_string),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn texts(result: &CallToolResult) -> Vec<String> {
    result
      .content
      .iter()
      .filter_map(|c| c.as_text().map(|t| t.text.clone()))
      .collect()
  }

  #[test]
  fn test_text_result_keeps_items_separate() {
    let result = text_result(vec![r#"{"id":"1"}"#.to_string(), r#"{"id":"2"}"#.to_string()]);

    assert_eq!(result.is_error, Some(false));
    assert_eq!(texts(&result), vec![r#"{"id":"1"}"#, r#"{"id":"2"}"#]);
  }

  #[test]
  fn test_error_envelope() {
    let result = ToolError::from(&JiraError::NotFound).to_call_tool_result();

    assert_eq!(result.is_error, Some(true));
    let body: serde_json::Value = serde_json::from_str(&texts(&result)[0]).unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(
      body["error"]["message"],
      "Not Found: The requested resource does not exist"
    );
    assert!(body["error"]["hint"].is_string());
  }

  #[test]
  fn test_api_error_has_no_hint() {
    let err = JiraError::Api {
      status: 400,
      body: "bad".to_string(),
    };
    let tool_error = ToolError::from(&err);

    assert_eq!(tool_error.code, "api_error");
    assert_eq!(tool_error.message, "Error: 400 - bad");
    assert!(tool_error.hint.is_none());

    let json = serde_json::to_value(&tool_error).unwrap();
    assert!(json.get("hint").is_none());
  }
}

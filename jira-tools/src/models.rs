use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key of a Jira issue, e.g. `PROJ-123`. Not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueKey(String);

impl IssueKey {
  pub fn new(key: impl Into<String>) -> Self {
    Self(key.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for IssueKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for IssueKey {
  fn from(key: &str) -> Self {
    Self::new(key)
  }
}

impl From<String> for IssueKey {
  fn from(key: String) -> Self {
    Self(key)
  }
}

/// Opaque identifier of a workflow transition, e.g. `21`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionId(String);

impl TransitionId {
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for TransitionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for TransitionId {
  fn from(id: &str) -> Self {
    Self::new(id)
  }
}

impl From<String> for TransitionId {
  fn from(id: String) -> Self {
    Self(id)
  }
}

/// Atlassian Document Format document, the rich-text shape Jira v3 expects
/// for descriptions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdfDocument {
  pub version: u32,
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub content: Vec<AdfNode>,
}

impl AdfDocument {
  /// Wrap plain text in a document holding a single paragraph.
  pub fn paragraph(text: impl Into<String>) -> Self {
    Self {
      version: 1,
      kind: "doc",
      content: vec![AdfNode::Paragraph {
        content: vec![AdfNode::Text { text: text.into() }],
      }],
    }
  }
}

/// Block and inline nodes used inside an [`AdfDocument`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AdfNode {
  Paragraph { content: Vec<AdfNode> },
  Text { text: String },
}

/// Payload for `POST /issue`
#[derive(Debug, Serialize)]
pub struct CreateIssueRequest {
  pub fields: CreateIssueFields,
}

#[derive(Debug, Serialize)]
pub struct CreateIssueFields {
  pub project: ProjectRef,
  pub summary: String,
  pub description: AdfDocument,
  pub issuetype: IssueTypeRef,
}

#[derive(Debug, Serialize)]
pub struct ProjectRef {
  pub key: String,
}

#[derive(Debug, Serialize)]
pub struct IssueTypeRef {
  pub name: String,
}

impl CreateIssueRequest {
  pub fn new(project_key: &str, summary: &str, description: &str, issue_type: &str) -> Self {
    Self {
      fields: CreateIssueFields {
        project: ProjectRef {
          key: project_key.to_string(),
        },
        summary: summary.to_string(),
        description: AdfDocument::paragraph(description),
        issuetype: IssueTypeRef {
          name: issue_type.to_string(),
        },
      },
    }
  }
}

/// Response body of `POST /issue`
#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
  pub id: Option<String>,
  pub key: IssueKey,
}

/// Represents a transition request payload
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionRef,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
pub struct TransitionRef {
  pub id: TransitionId,
}

/// Response body of `GET /search`. Issues are kept verbatim.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResults {
  pub issues: Vec<Value>,
}

/// Response body of `GET /issue/{key}/transitions`. Transitions are kept verbatim.
#[derive(Debug, Deserialize)]
pub(crate) struct TransitionList {
  pub transitions: Vec<Value>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_create_issue_request_serialization() {
    let request = CreateIssueRequest::new(
      "ARCADE",
      "Login Button Safari Issue",
      "The login button is not working on Safari browsers.",
      "Bug",
    );

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
      json,
      json!({
          "fields": {
              "project": { "key": "ARCADE" },
              "summary": "Login Button Safari Issue",
              "description": {
                  "version": 1,
                  "type": "doc",
                  "content": [
                      {
                          "type": "paragraph",
                          "content": [
                              {
                                  "type": "text",
                                  "text": "The login button is not working on Safari browsers."
                              }
                          ]
                      }
                  ]
              },
              "issuetype": { "name": "Bug" }
          }
      })
    );
  }

  #[test]
  fn test_transition_request_serialization() {
    let request = TransitionRequest {
      transition: TransitionRef {
        id: TransitionId::new("21"),
      },
    };

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
      json,
      json!({
          "transition": {
              "id": "21"
          }
      })
    );
  }

  #[test]
  fn test_created_issue_deserialization() {
    let json = json!({
        "id": "10000",
        "key": "PROJ-24",
        "self": "https://acme.atlassian.net/rest/api/3/issue/10000"
    });

    let created: CreatedIssue = serde_json::from_value(json).unwrap();

    assert_eq!(created.key, IssueKey::new("PROJ-24"));
    assert_eq!(created.id.as_deref(), Some("10000"));
  }

  #[test]
  fn test_identifiers_display_as_raw_strings() {
    assert_eq!(IssueKey::from("PROJ-1").to_string(), "PROJ-1");
    assert_eq!(TransitionId::from("31".to_string()).as_str(), "31");
    assert_eq!(serde_json::to_string(&IssueKey::new("PROJ-1")).unwrap(), r#""PROJ-1""#);
  }
}

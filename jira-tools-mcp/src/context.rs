//! Shared server context available to all tool handlers.

use jira_tools::JiraClient;

/// Shared context available to all tool handlers.
pub struct ServerContext {
  jira: JiraClient,
}

impl ServerContext {
  pub const fn new(jira: JiraClient) -> Self {
    Self { jira }
  }

  /// The Jira client built from the startup configuration.
  pub const fn jira(&self) -> &JiraClient {
    &self.jira
  }
}

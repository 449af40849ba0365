//! Client construction helpers.
//!
//! These helpers centralize credential lookup and runtime construction so that
//! both the tool server and synchronous callers reuse the same flow when
//! talking to Jira.

use tokio::runtime::Runtime;

use crate::JiraClient;
use crate::config::JiraConfig;
use crate::error::Result;

/// Check if Jira credentials are available in the environment.
pub fn check_jira_credentials() -> bool {
  JiraConfig::from_env().is_ok()
}

/// Creates an authenticated Jira client using credentials from the environment.
pub fn create_jira_client_from_env() -> Result<JiraClient> {
  let config = JiraConfig::from_env()?;
  JiraClient::new(config)
}

/// Creates a tokio runtime and an authenticated Jira client.
///
/// Synchronous callers drive any client operation with `runtime.block_on`.
pub fn create_jira_runtime_and_client(config: JiraConfig) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new()?;
  let client = JiraClient::new(config)?;
  Ok((rt, client))
}

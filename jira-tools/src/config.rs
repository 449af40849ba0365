//! Jira connection settings.
//!
//! A [`JiraConfig`] is resolved once at startup and handed to
//! [`JiraClient::new`](crate::JiraClient::new); nothing below the client reads
//! process environment on its own.

use std::fmt;

use crate::error::{JiraError, Result};

/// Environment variable holding the Jira site URL (e.g. `https://acme.atlassian.net`).
pub const ENV_JIRA_BASE_URL: &str = "JIRA_BASE_URL";
/// Environment variable holding the Atlassian account email.
pub const ENV_JIRA_EMAIL: &str = "JIRA_EMAIL";
/// Environment variable holding the Atlassian API token.
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";

/// Credentials and site URL used to reach the Jira REST API.
#[derive(Clone, PartialEq, Eq)]
pub struct JiraConfig {
  base_url: String,
  email: String,
  api_token: String,
}

impl JiraConfig {
  /// Build a configuration from explicit values.
  ///
  /// The base URL is normalized: surrounding whitespace and trailing slashes
  /// are removed, and `https://` is assumed when no scheme is given.
  pub fn new(base_url: impl Into<String>, email: impl Into<String>, api_token: impl Into<String>) -> Self {
    Self {
      base_url: normalize_base_url(&base_url.into()),
      email: email.into(),
      api_token: api_token.into(),
    }
  }

  /// Load the configuration from `JIRA_BASE_URL`, `JIRA_EMAIL` and
  /// `JIRA_API_TOKEN`.
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Resolve the three required values through `lookup`.
  ///
  /// Missing and blank values are treated the same way. If any value is
  /// unavailable the error names all three variables.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    match (read(ENV_JIRA_BASE_URL), read(ENV_JIRA_EMAIL), read(ENV_JIRA_API_TOKEN)) {
      (Some(base_url), Some(email), Some(api_token)) => Ok(Self::new(base_url, email, api_token)),
      _ => Err(JiraError::MissingConfig),
    }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn email(&self) -> &str {
    &self.email
  }

  pub fn api_token(&self) -> &str {
    &self.api_token
  }
}

impl fmt::Debug for JiraConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JiraConfig")
      .field("base_url", &self.base_url)
      .field("email", &self.email)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

fn normalize_base_url(input: &str) -> String {
  let trimmed = input.trim().trim_end_matches('/');
  let lowered = trimmed.to_ascii_lowercase();
  if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  }
}

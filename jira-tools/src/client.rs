use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::JiraConfig;
use crate::consts::{API_PATH, USER_AGENT};
use crate::error::{JiraError, Result, check_status};

/// Represents a Jira API client
///
/// Holds an immutable [`JiraConfig`] and a pooled HTTP client. Cloning is
/// cheap and clones share the pool.
#[derive(Clone)]
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) config: JiraConfig,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(config: JiraConfig) -> Result<Self> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &JiraConfig {
    &self.config
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}{}{}", self.config.base_url(), API_PATH, path)
  }

  /// Send an authenticated request to `{base_url}/rest/api/3{path}`.
  ///
  /// The response is returned whatever its status; only a transport failure
  /// produces an error here.
  pub async fn send(
    &self,
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&Value>,
  ) -> Result<Response> {
    let url = self.url(path);
    debug!(%method, %url, "Sending Jira request");

    let mut request = self
      .client
      .request(method, &url)
      .basic_auth(self.config.email(), Some(self.config.api_token()))
      .header(CONTENT_TYPE, "application/json")
      .header(ACCEPT, "application/json");

    if !query.is_empty() {
      request = request.query(query);
    }
    if let Some(body) = body {
      request = request.json(body);
    }

    let response = request.send().await?;
    trace!(status = %response.status(), %url, "Received Jira response");
    Ok(response)
  }
}

/// Pass `response` through when it carries `expected`, otherwise map it to an
/// error.
pub(crate) async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
  let status = response.status();
  if status == expected {
    return Ok(response);
  }

  let body = response.text().await.unwrap_or_default();
  check_status(status, &body)?;
  Err(JiraError::UnexpectedStatus(status.as_u16()))
}

/// Read and decode a JSON response body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
  let bytes = response.bytes().await?;
  Ok(serde_json::from_slice(&bytes)?)
}

/// Serialize each value on its own, keeping order.
pub(crate) fn to_json_strings(values: &[Value]) -> Result<Vec<String>> {
  values
    .iter()
    .map(|value| serde_json::to_string(value).map_err(JiraError::from))
    .collect()
}

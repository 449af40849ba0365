//! Error taxonomy for Jira operations and the status-code mapper.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;

/// Result alias used throughout the crate.
pub type Result<T, E = JiraError> = std::result::Result<T, E>;

/// Errors surfaced by Jira operations.
///
/// Every failure reaches the caller as one of these variants; nothing is
/// retried or swallowed.
#[derive(Debug, Error)]
pub enum JiraError {
  #[error("JIRA_BASE_URL, JIRA_EMAIL, and JIRA_API_TOKEN must be set")]
  MissingConfig,
  #[error("Request to Jira failed: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("Unauthorized: Invalid credentials")]
  Unauthorized,
  #[error("Forbidden: Insufficient permissions")]
  Forbidden,
  #[error("Not Found: The requested resource does not exist")]
  NotFound,
  #[error("Too Many Requests: Rate limit exceeded")]
  RateLimited,
  #[error("Error: {status} - {body}")]
  Api { status: u16, body: String },
  /// A non-error status other than the one the operation succeeds with.
  #[error("Unexpected response status: {0}")]
  UnexpectedStatus(u16),
  #[error("Failed to parse Jira response: {0}")]
  Decode(#[from] serde_json::Error),
  #[error("Failed to create async runtime: {0}")]
  Runtime(#[from] std::io::Error),
}

impl JiraError {
  /// Stable machine-readable code for this error category.
  pub const fn code(&self) -> &'static str {
    match self {
      Self::MissingConfig => "config_missing",
      Self::Transport(_) => "transport_error",
      Self::Unauthorized => "unauthorized",
      Self::Forbidden => "forbidden",
      Self::NotFound => "not_found",
      Self::RateLimited => "rate_limited",
      Self::Api { .. } => "api_error",
      Self::UnexpectedStatus(_) | Self::Decode(_) => "unexpected_response",
      Self::Runtime(_) => "internal",
    }
  }
}

/// Map an HTTP status to a categorized error.
///
/// 401, 403, 404 and 429 have fixed categories; any other status of 400 or
/// above becomes [`JiraError::Api`] carrying the response body. Statuses below
/// 400 pass.
pub fn check_status(status: StatusCode, body: &str) -> Result<()> {
  let err = match status {
    StatusCode::UNAUTHORIZED => JiraError::Unauthorized,
    StatusCode::FORBIDDEN => JiraError::Forbidden,
    StatusCode::NOT_FOUND => JiraError::NotFound,
    StatusCode::TOO_MANY_REQUESTS => JiraError::RateLimited,
    s if s.as_u16() >= 400 => JiraError::Api {
      status: s.as_u16(),
      body: body.to_string(),
    },
    _ => return Ok(()),
  };

  warn!(status = status.as_u16(), "Jira request failed: {err}");
  Err(err)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fixed_categories() {
    assert!(matches!(
      check_status(StatusCode::UNAUTHORIZED, ""),
      Err(JiraError::Unauthorized)
    ));
    assert!(matches!(check_status(StatusCode::FORBIDDEN, ""), Err(JiraError::Forbidden)));
    assert!(matches!(check_status(StatusCode::NOT_FOUND, ""), Err(JiraError::NotFound)));
    assert!(matches!(
      check_status(StatusCode::TOO_MANY_REQUESTS, ""),
      Err(JiraError::RateLimited)
    ));
  }

  #[test]
  fn test_generic_error_carries_status_and_body() {
    let body = r#"{"errorMessages":["Field 'summary' is required"],"errors":{}}"#;
    let err = check_status(StatusCode::BAD_REQUEST, body).unwrap_err();

    match &err {
      JiraError::Api { status, body: text } => {
        assert_eq!(*status, 400);
        assert_eq!(text, body);
      }
      other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(err.to_string(), format!("Error: 400 - {body}"));

    let err = check_status(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();
    assert_eq!(err.to_string(), "Error: 502 - upstream down");
  }

  #[test]
  fn test_success_and_redirect_codes_pass() {
    for status in [
      StatusCode::OK,
      StatusCode::CREATED,
      StatusCode::NO_CONTENT,
      StatusCode::FOUND,
    ] {
      assert!(check_status(status, "").is_ok(), "{status} should pass");
    }
  }

  #[test]
  fn test_error_messages() {
    assert_eq!(JiraError::Unauthorized.to_string(), "Unauthorized: Invalid credentials");
    assert_eq!(JiraError::Forbidden.to_string(), "Forbidden: Insufficient permissions");
    assert_eq!(
      JiraError::NotFound.to_string(),
      "Not Found: The requested resource does not exist"
    );
    assert_eq!(JiraError::RateLimited.to_string(), "Too Many Requests: Rate limit exceeded");
  }

  #[test]
  fn test_codes() {
    assert_eq!(JiraError::MissingConfig.code(), "config_missing");
    assert_eq!(JiraError::NotFound.code(), "not_found");
    assert_eq!(JiraError::RateLimited.code(), "rate_limited");
    assert_eq!(
      JiraError::Api {
        status: 500,
        body: String::new()
      }
      .code(),
      "api_error"
    );
    assert_eq!(JiraError::UnexpectedStatus(200).code(), "unexpected_response");
  }
}

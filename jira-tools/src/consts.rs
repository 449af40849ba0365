//! Constants for the Jira tools client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Path prefix of the Jira Cloud REST API, appended to the configured base URL
pub const API_PATH: &str = "/rest/api/3";

//! # Jira Tools
//!
//! Request/response mapping between agent-level issue operations and the Jira
//! Cloud REST API v3: credential loading, an authenticated request dispatcher,
//! status-code error mapping, and the five issue operations (create, delete,
//! transition, list issues, list transitions).

pub mod auth;
mod client;
pub mod config;
mod consts;
mod endpoints;
pub mod error;
pub mod models;

pub use auth::{check_jira_credentials, create_jira_client_from_env, create_jira_runtime_and_client};
// Re-export the client
pub use client::JiraClient;
pub use config::{ENV_JIRA_API_TOKEN, ENV_JIRA_BASE_URL, ENV_JIRA_EMAIL, JiraConfig};
pub use endpoints::search::DEFAULT_MAX_RESULTS;
pub use error::{JiraError, Result, check_status};
// Re-export models
pub use models::{AdfDocument, AdfNode, CreateIssueRequest, IssueKey, TransitionId, TransitionRequest};

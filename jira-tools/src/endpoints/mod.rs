//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by Jira resource: issue creation and
//! deletion, project search, and workflow transitions.

pub mod issues;
pub mod search;
pub mod transitions;

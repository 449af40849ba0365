//! Parameter structs for the Jira tools.

pub mod issues;
pub mod transitions;

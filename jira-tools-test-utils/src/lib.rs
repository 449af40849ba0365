//! Test utilities shared across the jira-tools workspace
//!
//! This crate provides:
//! - Process environment isolation ([`EnvVarGuard`])
//! - Throwaway dotenv files ([`EnvFileGuard`])
//!
//! The dead_code lint is disabled for this crate because test utilities may
//! not be used by all tests, and the compiler cannot detect usage across crate
//! boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;

// Re-export commonly used items
pub use env::{EnvFileGuard, EnvVarGuard};

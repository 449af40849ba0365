//! jira-tools-mcp: MCP server exposing Jira issue operations as agent tools.

mod context;
mod env_file;
mod server;
mod tools;
mod types;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use jira_tools::{JiraClient, JiraConfig};
use rmcp::ServiceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::context::ServerContext;
use crate::server::JiraToolsServer;

#[derive(Parser)]
#[command(version, about = "MCP server for creating, transitioning, listing and deleting Jira issues")]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,

  /// Load JIRA_* variables from this file (defaults to ~/.jira-tools/jira.env when present)
  #[arg(long = "env-file", value_name = "PATH")]
  env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // Tracing to stderr — stdout is reserved for MCP JSON-RPC protocol.
  let level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  if let Some(path) = env_file::load_env_file(cli.env_file.as_deref(), env_file::default_env_file())? {
    info!(path = %path.display(), "Loaded environment file");
  }

  let config = JiraConfig::from_env().context("Failed to load Jira configuration")?;
  info!(base_url = config.base_url(), "Using Jira site");
  let client = JiraClient::new(config).context("Failed to build Jira client")?;

  let server = JiraToolsServer::new(ServerContext::new(client));

  // Start MCP server on stdio
  let service = server.serve(rmcp::transport::io::stdio()).await?;
  service.waiting().await?;

  Ok(())
}

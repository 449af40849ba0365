//! MCP server implementation with all tool handlers.

use std::sync::Arc;

use jira_tools::{IssueKey, JiraError, TransitionId};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use tracing::{debug, warn};

use crate::context::ServerContext;
use crate::tools::issues::{CreateIssueParams, DeleteIssueParams, ListProjectIssuesParams};
use crate::tools::transitions::{GetIssueTransitionsParams, TransitionIssueParams};
use crate::types::{ToolError, text_result};

#[derive(Clone)]
pub struct JiraToolsServer {
  context: Arc<ServerContext>,
  tool_router: ToolRouter<Self>,
}

#[tool_router]
impl JiraToolsServer {
  pub fn new(context: ServerContext) -> Self {
    let context = Arc::new(context);
    Self {
      context,
      tool_router: Self::tool_router(),
    }
  }

  #[tool(description = "Create a new issue in Jira. Returns the key of the created issue.")]
  async fn create_issue(&self, params: Parameters<CreateIssueParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    debug!(project = %p.project_key, issue_type = %p.issue_type, "create_issue called");

    match self
      .context
      .jira()
      .create_issue(&p.project_key, &p.summary, &p.description, &p.issue_type)
      .await
    {
      Ok(key) => Ok(text_result([key.into_inner()])),
      Err(e) => tool_failure("create_issue", &e),
    }
  }

  #[tool(
    description = "Transition a Jira issue to a new status. Returns true if the transition was successful.",
    annotations(idempotent_hint = false)
  )]
  async fn transition_issue(&self, params: Parameters<TransitionIssueParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    let issue_key = IssueKey::new(p.issue_key);
    let transition_id = TransitionId::new(p.transition_id);

    match self.context.jira().transition_issue(&issue_key, &transition_id).await {
      Ok(done) => Ok(text_result([done.to_string()])),
      Err(e) => tool_failure("transition_issue", &e),
    }
  }

  #[tool(
    description = "List issues in a Jira project. Returns one JSON document per issue, each containing key and \
                   fields with summary, status, and issuetype information.",
    annotations(read_only_hint = true, idempotent_hint = true)
  )]
  async fn list_project_issues(&self, params: Parameters<ListProjectIssuesParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;

    match self
      .context
      .jira()
      .list_project_issues(&p.project_key, p.max_results)
      .await
    {
      Ok(issues) => Ok(text_result(issues)),
      Err(e) => tool_failure("list_project_issues", &e),
    }
  }

  #[tool(
    description = "Delete a Jira issue. Returns true if the issue was successfully deleted.",
    annotations(destructive_hint = true)
  )]
  async fn delete_issue(&self, params: Parameters<DeleteIssueParams>) -> Result<CallToolResult, McpError> {
    let issue_key = IssueKey::new(params.0.issue_key);

    match self.context.jira().delete_issue(&issue_key).await {
      Ok(done) => Ok(text_result([done.to_string()])),
      Err(e) => tool_failure("delete_issue", &e),
    }
  }

  #[tool(
    description = "Get all available transitions for a Jira issue. Returns one JSON document per transition, each \
                   containing id, name, and destination status information.",
    annotations(read_only_hint = true, idempotent_hint = true)
  )]
  async fn get_issue_transitions(
    &self,
    params: Parameters<GetIssueTransitionsParams>,
  ) -> Result<CallToolResult, McpError> {
    let issue_key = IssueKey::new(params.0.issue_key);

    match self.context.jira().get_issue_transitions(&issue_key).await {
      Ok(transitions) => Ok(text_result(transitions)),
      Err(e) => tool_failure("get_issue_transitions", &e),
    }
  }
}

#[tool_handler]
impl ServerHandler for JiraToolsServer {
  fn get_info(&self) -> ServerInfo {
    ServerInfo {
      instructions: Some(
        "Jira tools MCP server. Creates, transitions, lists and deletes issues in the configured Jira site. \
         Use get_issue_transitions to find a transition id before calling transition_issue."
          .into(),
      ),
      capabilities: ServerCapabilities::builder().enable_tools().build(),
      ..Default::default()
    }
  }
}

fn tool_failure(tool: &str, err: &JiraError) -> Result<CallToolResult, McpError> {
  warn!(tool, code = err.code(), "Tool call failed: {err}");
  ToolError::from(err).into_result()
}

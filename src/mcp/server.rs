//! MCP server implementation
//!
//! Bridges rmcp's `ServerHandler` to the tool registry: `list_tools` reads
//! the registry descriptors, `call_tool` dispatches by name.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Content, JsonObject, ListToolsResult,
        PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
};
use serde_json::Value;
use tracing::{error, info};

use crate::error::ToolError;

use super::registry::ToolRegistry;

const INSTRUCTIONS: &str = "MyAnimeList MCP Server - Search anime, manga and producers, \
     browse rankings and seasons, and read reviews, recommendations and news \
     from MyAnimeList via the Jikan API";

/// Main MCP server
///
/// Holds only the shared registry, so the HTTP transport can create one per
/// session without rebuilding any tools.
#[derive(Clone)]
pub struct MalServer {
    registry: ToolRegistry,
}

impl MalServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Registry descriptors as MCP tool definitions.
    pub fn tools(&self) -> Vec<Tool> {
        self.registry
            .descriptors()
            .map(|d| Tool::new(d.name, d.description, d.input_schema.clone()))
            .collect()
    }

    /// Run a tool and render the outcome.
    ///
    /// Success is pretty-printed JSON text. Every failure, including an
    /// unknown tool name, comes back as an error result carrying
    /// `{"error": {"kind", "message", ...}}` so the caller can inspect it.
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let params = arguments.map(Value::Object).unwrap_or(Value::Null);

        match self.registry.dispatch(name, params).await {
            Ok(value) => match serde_json::to_string_pretty(&value) {
                Ok(text) => CallToolResult::success(vec![Content::text(text)]),
                Err(e) => failure(&ToolError::validation(format!(
                    "failed to render {} result: {}",
                    name, e
                ))),
            },
            Err(e) => failure(&e),
        }
    }
}

fn failure(err: &ToolError) -> CallToolResult {
    if err.is_caller_error() {
        info!(kind = err.kind(), "Rejected tool call: {}", err);
    } else {
        error!(kind = err.kind(), "Tool call failed: {}", err);
    }
    CallToolResult::error(vec![Content::text(err.to_payload().to_string())])
}

impl ServerHandler for MalServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_instructions(INSTRUCTIONS.to_string())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.call(&request.name, request.arguments).await)
    }
}

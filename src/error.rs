//! Tool failure taxonomy.
//!
//! Every tool call either returns a validated value or one of these
//! variants. Failures are rendered back to the MCP client as structured
//! JSON so callers can tell their own mistakes apart from upstream or
//! network trouble.

use miette::Diagnostic;
use serde_json::{Value, json};
use thiserror::Error;

/// Failure of a single tool invocation.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ToolError {
    #[error("Invalid parameter: {message}")]
    #[diagnostic(
        code(mal_mcp::tool::invalid_parameter),
        help("Check the tool's input schema; the request was not sent upstream.")
    )]
    InvalidParameter { message: String },

    #[error("Transport failure: {message}")]
    #[diagnostic(
        code(mal_mcp::tool::transport),
        help("The Jikan API could not be reached or did not answer in time.")
    )]
    Transport { message: String },

    #[error("Upstream API error ({status}): {body}")]
    #[diagnostic(code(mal_mcp::tool::upstream))]
    Upstream { status: u16, body: String },

    #[error("Failed to decode upstream response: {message}")]
    #[diagnostic(code(mal_mcp::tool::decode))]
    Decode { message: String },

    #[error("Upstream response does not match the expected shape: {message}")]
    #[diagnostic(
        code(mal_mcp::tool::validation),
        help("The Jikan API contract may have changed.")
    )]
    Validation { message: String },

    #[error("Unknown tool: {name}")]
    #[diagnostic(code(mal_mcp::tool::unknown_tool))]
    UnknownTool { name: String },
}

impl ToolError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        ToolError::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ToolError::Validation {
            message: message.into(),
        }
    }

    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::InvalidParameter { .. } => "invalid_parameter",
            ToolError::Transport { .. } => "transport",
            ToolError::Upstream { .. } => "upstream",
            ToolError::Decode { .. } => "decode",
            ToolError::Validation { .. } => "validation",
            ToolError::UnknownTool { .. } => "unknown_tool",
        }
    }

    /// True when the failure was caused by the caller rather than upstream.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            ToolError::InvalidParameter { .. } | ToolError::UnknownTool { .. }
        )
    }

    /// Structured description returned to MCP clients.
    pub fn to_payload(&self) -> Value {
        let mut error = json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let ToolError::Upstream { status, body } = self {
            error["status"] = json!(status);
            error["body"] = json!(body);
        }
        json!({ "error": error })
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("request timed out: {}", e)
        } else if e.is_connect() {
            format!("connection failed: {}", e)
        } else {
            e.to_string()
        };
        ToolError::Transport { message }
    }
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

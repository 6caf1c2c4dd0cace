//! Tests for tool error types.

use crate::error::ToolError;
use serde_json::json;

#[test]
fn invalid_parameter_displays_correctly() {
    let err = ToolError::invalid_parameter("id must be a positive integer, got 0");
    assert_eq!(
        err.to_string(),
        "Invalid parameter: id must be a positive integer, got 0"
    );
}

#[test]
fn upstream_error_displays_status_and_body() {
    let err = ToolError::Upstream {
        status: 500,
        body: "Internal Server Error".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Upstream API error (500): Internal Server Error"
    );
}

#[test]
fn unknown_tool_displays_name() {
    let err = ToolError::UnknownTool {
        name: "get_anime_lyrics".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown tool: get_anime_lyrics");
}

#[test]
fn kinds_are_distinct() {
    let errors = [
        ToolError::invalid_parameter("x"),
        ToolError::Transport {
            message: "x".to_string(),
        },
        ToolError::Upstream {
            status: 404,
            body: String::new(),
        },
        ToolError::Decode {
            message: "x".to_string(),
        },
        ToolError::validation("x"),
        ToolError::UnknownTool {
            name: "x".to_string(),
        },
    ];
    let mut kinds: Vec<_> = errors.iter().map(ToolError::kind).collect();
    kinds.sort();
    kinds.dedup();
    assert_eq!(kinds.len(), errors.len());
}

#[test]
fn caller_errors_are_flagged() {
    assert!(ToolError::invalid_parameter("bad page").is_caller_error());
    assert!(
        ToolError::UnknownTool {
            name: "nope".to_string()
        }
        .is_caller_error()
    );
    assert!(
        !ToolError::Transport {
            message: "timed out".to_string()
        }
        .is_caller_error()
    );
}

#[test]
fn upstream_payload_carries_status_and_body() {
    let err = ToolError::Upstream {
        status: 429,
        body: r#"{"status":429,"type":"RateLimitException"}"#.to_string(),
    };
    let payload = err.to_payload();
    assert_eq!(payload["error"]["kind"], "upstream");
    assert_eq!(payload["error"]["status"], 429);
    assert_eq!(
        payload["error"]["body"],
        r#"{"status":429,"type":"RateLimitException"}"#
    );
}

#[test]
fn payload_without_status_for_other_kinds() {
    let payload = ToolError::validation("data[0]: missing field `mal_id`").to_payload();
    assert_eq!(
        payload,
        json!({
            "error": {
                "kind": "validation",
                "message": "Upstream response does not match the expected shape: data[0]: missing field `mal_id`",
            }
        })
    );
}

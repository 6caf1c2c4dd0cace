//! Tests for the MCP server handler

use std::sync::Arc;

use rmcp::ServerHandler;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Value, json};

use crate::jikan::{HttpResponse, JikanClient, MockHttpTransport};
use crate::mcp::server::MalServer;
use crate::mcp::tools::build_registry;
use crate::models::fixtures;

fn server(transport: MockHttpTransport) -> MalServer {
    MalServer::new(build_registry(Arc::new(JikanClient::new(
        "http://jikan.test/v4",
        transport,
    ))))
}

fn text_of(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    }
}

fn arguments(value: Value) -> Option<serde_json::Map<String, Value>> {
    value.as_object().cloned()
}

#[test]
fn test_server_info() {
    let info = server(MockHttpTransport::new()).get_info();

    assert!(
        info.capabilities.tools.is_some(),
        "Server should support tools"
    );
    assert!(
        info.instructions.is_some(),
        "Server should provide instructions"
    );
}

#[test]
fn test_tools_match_registry() {
    let server = server(MockHttpTransport::new());
    let tools = server.tools();

    assert_eq!(tools.len(), 14);
    let names: Vec<&str> = tools.iter().map(|t| &*t.name).collect();
    assert!(names.contains(&"search_anime"));
    assert!(names.contains(&"get_producer_details"));

    let seasonal = tools
        .iter()
        .find(|t| t.name == "get_seasonal_anime")
        .unwrap();
    assert!(seasonal.input_schema.contains_key("properties"));
    assert!(seasonal.description.is_some());
}

#[tokio::test]
async fn test_call_renders_success_as_json_text() {
    let body = fixtures::list(vec![fixtures::anime(20, "Naruto")]).to_string();
    let mut transport = MockHttpTransport::new();
    transport
        .expect_get()
        .times(1)
        .returning(move |_| Ok(HttpResponse::new(200, body.clone())));

    let result = server(transport)
        .call("search_anime", arguments(json!({"q": "Naruto"})))
        .await;

    assert_ne!(result.is_error, Some(true));
    let value: Value = serde_json::from_str(text_of(&result)).unwrap();
    assert_eq!(value["items"][0]["title"], "Naruto");
}

#[tokio::test]
async fn test_call_unknown_tool_is_error_result() {
    let result = server(MockHttpTransport::new())
        .call("nonexistent_tool", None)
        .await;

    assert_eq!(result.is_error, Some(true));
    let value: Value = serde_json::from_str(text_of(&result)).unwrap();
    assert_eq!(value["error"]["kind"], "unknown_tool");
}

#[tokio::test]
async fn test_call_upstream_failure_carries_status_and_body() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_get()
        .times(1)
        .returning(|_| Ok(HttpResponse::new(429, "Too Many Requests")));

    let result = server(transport).call("get_random_manga", None).await;

    assert_eq!(result.is_error, Some(true));
    let value: Value = serde_json::from_str(text_of(&result)).unwrap();
    assert_eq!(
        value,
        json!({
            "error": {
                "kind": "upstream",
                "message": "Upstream API error (429): Too Many Requests",
                "status": 429,
                "body": "Too Many Requests"
            }
        })
    );
}

#[tokio::test]
async fn test_call_invalid_parameter_skips_upstream() {
    let mut transport = MockHttpTransport::new();
    transport.expect_get().never();

    let result = server(transport)
        .call("get_similar_anime", arguments(json!({"id": -1})))
        .await;

    assert_eq!(result.is_error, Some(true));
    let value: Value = serde_json::from_str(text_of(&result)).unwrap();
    assert_eq!(value["error"]["kind"], "invalid_parameter");
}

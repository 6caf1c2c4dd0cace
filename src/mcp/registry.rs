//! Tool registry and dispatcher.
//!
//! Tools are registered once at startup with a name, a description, a typed
//! parameter struct and an async handler. The registry derives each tool's
//! JSON input schema from the parameter type and turns raw JSON arguments
//! into typed calls. After `build()` it is immutable and cheap to clone.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{self, BoxFuture, FutureExt};
use rmcp::schemars::{self, JsonSchema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::{debug, info, instrument, warn};

use crate::error::{ToolError, ToolResult};

pub type JsonObject = Map<String, Value>;

type ToolFuture = BoxFuture<'static, ToolResult<Value>>;
type Handler = Arc<dyn Fn(Value) -> ToolFuture + Send + Sync>;

/// Advertised shape of a registered tool.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Arc<JsonObject>,
}

struct RegisteredTool {
    descriptor: ToolDescriptor,
    handler: Handler,
}

/// Collects tools before the registry is frozen.
#[derive(Default)]
pub struct ToolRegistryBuilder {
    tools: BTreeMap<&'static str, RegisteredTool>,
}

impl ToolRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool.
    ///
    /// # Panics
    ///
    /// Panics if a tool with the same name is already registered. Tool sets
    /// are fixed at startup, so a duplicate is a programming error.
    pub fn register<P, R, F, Fut>(
        &mut self,
        name: &'static str,
        description: &'static str,
        handler: F,
    ) -> &mut Self
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        R: Serialize + Send + 'static,
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult<R>> + Send + 'static,
    {
        assert!(
            !self.tools.contains_key(name),
            "tool '{}' is already registered",
            name
        );

        let erased: Handler = Arc::new(move |raw: Value| -> ToolFuture {
            let params = match parse_params::<P>(name, raw) {
                Ok(params) => params,
                Err(e) => return future::ready(Err(e)).boxed(),
            };
            let call = handler(params);
            async move {
                let output = call.await?;
                serde_json::to_value(output).map_err(|e| {
                    ToolError::validation(format!("failed to serialize {} result: {}", name, e))
                })
            }
            .boxed()
        });

        self.tools.insert(
            name,
            RegisteredTool {
                descriptor: ToolDescriptor {
                    name,
                    description,
                    input_schema: input_schema::<P>(),
                },
                handler: erased,
            },
        );
        self
    }

    pub fn build(self) -> ToolRegistry {
        ToolRegistry {
            tools: Arc::new(self.tools),
        }
    }
}

/// Immutable name -> tool table shared by every session.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Arc<BTreeMap<&'static str, RegisteredTool>>,
}

impl ToolRegistry {
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn descriptor(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name).map(|tool| &tool.descriptor)
    }

    /// Descriptors ordered by tool name.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.values().map(|tool| &tool.descriptor)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.keys().copied().collect()
    }

    /// Parse `params` for the named tool, run it and serialize its output.
    #[instrument(skip(self, params))]
    pub async fn dispatch(&self, name: &str, params: Value) -> ToolResult<Value> {
        let Some(tool) = self.tools.get(name) else {
            warn!("Unknown tool requested");
            return Err(ToolError::UnknownTool {
                name: name.to_string(),
            });
        };

        debug!(%params, "Dispatching tool call");
        let result = (tool.handler)(params).await;
        match &result {
            Ok(_) => info!("Tool call succeeded"),
            Err(e) => warn!(kind = e.kind(), "Tool call failed: {}", e),
        }
        result
    }
}

/// Absent (`null`) parameters read as an empty object; anything that is
/// not an object is rejected before deserialization.
fn parse_params<P: DeserializeOwned>(tool: &str, raw: Value) -> ToolResult<P> {
    let raw = match raw {
        Value::Null => Value::Object(Map::new()),
        Value::Object(map) => Value::Object(map),
        other => {
            return Err(ToolError::invalid_parameter(format!(
                "{}: parameters must be a JSON object, got {}",
                tool,
                json_type(&other)
            )));
        }
    };
    serde_json::from_value(raw)
        .map_err(|e| ToolError::invalid_parameter(format!("{}: {}", tool, e)))
}

fn input_schema<P: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(P)) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => {
            let mut fallback = Map::new();
            fallback.insert("type".to_string(), json!("object"));
            Arc::new(fallback)
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

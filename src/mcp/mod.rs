//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the MyAnimeList tools over stdio or Streamable HTTP.
//!
//! # Architecture
//!
//! - **registry**: name -> (schema, handler) table built once at startup
//! - **tools**: tool structs per entity (AnimeTools, MangaTools, ProducerTools)
//! - **server**: `MalServer`, the rmcp `ServerHandler` over the registry
//! - **service**: HTTP and stdio transports
//!
//! Tool structs are generic over `T: HttpTransport`, so the whole stack runs
//! against a mock transport in tests.

pub mod registry;
pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod server_test;

pub use registry::{ToolDescriptor, ToolRegistry, ToolRegistryBuilder};
pub use server::MalServer;
pub use service::{
    MCP_PATH, ServerError, create_mcp_service, create_router, serve_http, serve_stdio,
};
pub use tools::build_registry;

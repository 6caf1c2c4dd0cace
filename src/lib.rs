//! MyAnimeList tools for MCP clients, backed by the Jikan v4 REST API.

pub mod config;
pub mod error;
pub mod jikan;
pub mod logging;
pub mod mcp;
pub mod models;

#[cfg(test)]
mod error_test;

//! MCP transports
//!
//! Streamable HTTP (mounted on an Axum router at `/mcp`) and stdio. Both
//! serve the same registry; the HTTP service creates one `MalServer` per
//! session from a cheap registry clone.

use std::net::SocketAddr;

use axum::Router;
use miette::Diagnostic;
use rmcp::ServiceExt;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::registry::ToolRegistry;
use super::server::MalServer;

/// Path the Streamable HTTP endpoint is mounted under.
pub const MCP_PATH: &str = "/mcp";

#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(mal_mcp::server::bind),
        help("Check that the port is free or pass a different --port.")
    )]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    #[diagnostic(code(mal_mcp::server::http))]
    Http(#[source] std::io::Error),

    #[error("MCP session error: {0}")]
    #[diagnostic(code(mal_mcp::server::mcp))]
    Mcp(String),
}

/// Create MCP Streamable HTTP service
///
/// The returned service implements `tower::Service` and can be nested into
/// any Axum router.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use mal_mcp::config::Config;
/// # use mal_mcp::jikan::JikanClient;
/// # use mal_mcp::mcp::{build_registry, create_mcp_service};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = JikanClient::from_config(&Config::default())?;
/// let registry = build_registry(Arc::new(client));
///
/// let ct = CancellationToken::new();
/// let app: Router = Router::new().nest_service("/mcp", create_mcp_service(registry, ct));
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    registry: ToolRegistry,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<MalServer, LocalSessionManager> {
    // Factory signature is fixed by rmcp: one server per session.
    let service_factory =
        move || -> Result<MalServer, std::io::Error> { Ok(MalServer::new(registry.clone())) };

    let config = StreamableHttpServerConfig::default()
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

/// Router with the MCP endpoint and HTTP request tracing.
pub fn create_router(registry: ToolRegistry, cancellation_token: CancellationToken) -> Router {
    Router::new()
        .nest_service(MCP_PATH, create_mcp_service(registry, cancellation_token))
        .layer(TraceLayer::new_for_http())
}

/// Serve over Streamable HTTP until `cancellation_token` fires.
pub async fn serve_http(
    registry: ToolRegistry,
    addr: SocketAddr,
    cancellation_token: CancellationToken,
) -> Result<(), ServerError> {
    let app = create_router(registry, cancellation_token.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("MCP server listening on http://{}{}", addr, MCP_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(cancellation_token.cancelled_owned())
        .await
        .map_err(ServerError::Http)?;

    info!("MCP server stopped");
    Ok(())
}

/// Serve a single session over stdin/stdout until the client disconnects.
pub async fn serve_stdio(registry: ToolRegistry) -> Result<(), ServerError> {
    info!("MCP server running on stdio");

    let service = MalServer::new(registry)
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServerError::Mcp(e.to_string()))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| ServerError::Mcp(e.to_string()))?;

    info!(?reason, "MCP stdio session ended");
    Ok(())
}

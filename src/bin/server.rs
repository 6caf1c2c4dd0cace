//! MyAnimeList MCP server binary.
//!
//! Resolves configuration, builds the reqwest-backed Jikan client and the
//! tool registry, then serves it over stdio or Streamable HTTP.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use mal_mcp::config::{Config, ConfigError};
use mal_mcp::error::ToolError;
use mal_mcp::jikan::JikanClient;
use mal_mcp::logging::init_tracing;
use mal_mcp::mcp::{ServerError, build_registry, serve_http, serve_stdio};
use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(mal_mcp::binary::config))]
    Config(#[from] ConfigError),

    #[error("Failed to create HTTP client: {0}")]
    #[diagnostic(code(mal_mcp::binary::client))]
    Client(#[from] ToolError),

    #[error("MCP server error: {0}")]
    #[diagnostic(code(mal_mcp::binary::server))]
    Server(#[from] ServerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    /// Single session over stdin/stdout
    Stdio,
    /// Streamable HTTP at /mcp
    Http,
}

#[derive(Parser)]
#[command(name = "mal-mcp")]
#[command(author, version, about = "MyAnimeList MCP server (Jikan API)", long_about = None)]
struct Cli {
    /// Transport to serve MCP over
    #[arg(long, value_enum, default_value = "stdio")]
    transport: Transport,

    /// Host address to bind to (http transport)
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Jikan API base URL (overrides JIKAN_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Upstream request timeout in seconds (default: 30)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    init_tracing(cli.log_file.as_deref());
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Ignoring unreadable .env file: {}", e);
        }
    }

    run(cli).await?;
    Ok(())
}

async fn run(cli: Cli) -> Result<(), BinaryError> {
    let config = Config::resolve(cli.base_url, cli.timeout_secs)?;
    info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        "Using Jikan API"
    );

    let client = JikanClient::from_config(&config)?;
    let registry = build_registry(Arc::new(client));
    info!("Registered {} tools", registry.len());

    match cli.transport {
        Transport::Stdio => serve_stdio(registry).await?,
        Transport::Http => {
            let ct = CancellationToken::new();
            let shutdown = ct.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("Shutdown requested");
                }
                shutdown.cancel();
            });

            serve_http(registry, SocketAddr::new(cli.host, cli.port), ct).await?;
        }
    }

    Ok(())
}

use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::config::Config;
use crate::error::{ToolError, ToolResult};

use super::query::QueryParams;
use super::transport::{HttpRequest, HttpTransport, ReqwestTransport};

/// Longest body excerpt written to the log on upstream failures.
const LOG_BODY_LIMIT: usize = 512;

/// Client for the Jikan REST API.
///
/// Holds only the immutable base URL and the transport, so one instance is
/// shared by every concurrent tool call.
pub struct JikanClient<T: HttpTransport> {
    base_url: String,
    transport: T,
}

impl JikanClient<ReqwestTransport> {
    /// Create a reqwest-backed client from resolved configuration.
    pub fn from_config(config: &Config) -> ToolResult<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::new(config.base_url.clone(), transport))
    }
}

impl<T: HttpTransport> JikanClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path such as `/anime` or `/anime/1/news`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` with `query` and decode the body as JSON.
    ///
    /// Transport errors and timeouts map to `ToolError::Transport`, non-2xx
    /// statuses to `ToolError::Upstream`, unparsable bodies to
    /// `ToolError::Decode`.
    #[instrument(skip(self, query))]
    pub async fn fetch(&self, path: &str, query: QueryParams) -> ToolResult<Value> {
        let request = HttpRequest {
            url: self.url_for(path),
            query: query.into_pairs(),
        };
        info!(url = %request.url, query = ?request.query, "Requesting Jikan");

        let response = self.transport.get(request).await.map_err(|e| {
            error!("Request to {} failed: {}", path, e);
            e
        })?;

        if !response.is_success() {
            warn!(
                status = response.status,
                body = %truncate(&response.body, LOG_BODY_LIMIT),
                "Jikan returned an error status"
            );
            return Err(ToolError::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| {
            error!("Failed to parse JSON response from {}: {}", path, e);
            ToolError::Decode {
                message: e.to_string(),
            }
        })
    }
}

fn truncate(body: &str, limit: usize) -> &str {
    match body.char_indices().nth(limit) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

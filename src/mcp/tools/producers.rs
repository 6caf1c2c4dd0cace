//! Producer lookup tool

use std::sync::Arc;

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ToolResult;
use crate::jikan::{HttpTransport, JikanClient, QueryParams};
use crate::mcp::registry::ToolRegistryBuilder;
use crate::models::{Page, Producer, validate_list};

use super::common::{check_limit, check_page, check_query};
use super::options::{ProducerOrderBy, SortDirection};

#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProducerParams {
    #[schemars(description = "Producer or studio name to search for")]
    pub q: Option<String>,
    #[schemars(description = "Page number, starting at 1")]
    pub page: Option<i64>,
    #[schemars(description = "Results per page (1-25)")]
    pub limit: Option<i64>,
    #[schemars(description = "Field to order results by")]
    pub order_by: Option<ProducerOrderBy>,
    #[schemars(description = "Sort direction for order_by")]
    pub sort: Option<SortDirection>,
}

impl ProducerParams {
    pub fn query(&self) -> ToolResult<QueryParams> {
        Ok(QueryParams::new()
            .with("q", check_query(self.q.as_deref())?)
            .with("page", check_page(self.page)?)
            .with("limit", check_limit(self.limit)?)
            .with("order_by", self.order_by)
            .with("sort", self.sort))
    }
}

/// Producer tools
pub struct ProducerTools<T: HttpTransport> {
    client: Arc<JikanClient<T>>,
}

impl<T: HttpTransport> Clone for ProducerTools<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: HttpTransport + 'static> ProducerTools<T> {
    pub fn new(client: Arc<JikanClient<T>>) -> Self {
        Self { client }
    }

    /// Search producers and studios; each result carries its display name,
    /// alternative titles, founding date and catalogue size.
    #[instrument(skip(self))]
    pub async fn get_producer_details(
        &self,
        params: ProducerParams,
    ) -> ToolResult<Page<Producer>> {
        let query = params.query()?;
        let body = self.client.fetch("/producers", query).await?;
        validate_list(&body)
    }

    pub fn register(&self, builder: &mut ToolRegistryBuilder) {
        let tools = self.clone();
        builder.register(
            "get_producer_details",
            "Look up anime producers and studios by name, with founding date, \
             description and number of titles produced.",
            move |params: ProducerParams| {
                let tools = tools.clone();
                async move { tools.get_producer_details(params).await }
            },
        );
    }
}

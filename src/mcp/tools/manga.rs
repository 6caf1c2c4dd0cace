//! Manga tool implementations

use std::sync::Arc;

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ToolResult;
use crate::jikan::{HttpTransport, JikanClient, QueryParams};
use crate::mcp::registry::ToolRegistryBuilder;
use crate::models::{Manga, NewsItem, Page, Recommendation, Review, validate_item, validate_list};

use super::common::{
    IdParams, NewsRequest, NoParams, ReviewParams, ReviewsRequest, check_date, check_limit,
    check_page, check_query, fetch_news, fetch_recommendations, fetch_reviews,
};
use super::options::{MangaOrderBy, MangaStatus, MangaType, SortDirection, TopMangaFilter};

#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchMangaParams {
    #[schemars(description = "Search text matched against manga titles")]
    pub q: Option<String>,
    #[serde(rename = "type")]
    #[schemars(description = "Publication type filter")]
    pub kind: Option<MangaType>,
    #[schemars(description = "Publishing status filter")]
    pub status: Option<MangaStatus>,
    #[schemars(description = "Published on or after this date (YYYY, YYYY-MM or YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[schemars(description = "Published on or before this date (YYYY, YYYY-MM or YYYY-MM-DD)")]
    pub end_date: Option<String>,
    #[schemars(description = "Page number, starting at 1")]
    pub page: Option<i64>,
    #[schemars(description = "Results per page (1-25)")]
    pub limit: Option<i64>,
    #[schemars(description = "Field to order results by")]
    pub order_by: Option<MangaOrderBy>,
    #[schemars(description = "Sort direction for order_by")]
    pub sort: Option<SortDirection>,
    #[schemars(description = "Exclude adult entries")]
    pub sfw: Option<bool>,
}

impl SearchMangaParams {
    pub fn query(&self) -> ToolResult<QueryParams> {
        Ok(QueryParams::new()
            .with("q", check_query(self.q.as_deref())?)
            .with("type", self.kind)
            .with("status", self.status)
            .with("start_date", check_date("start_date", self.start_date.as_deref())?)
            .with("end_date", check_date("end_date", self.end_date.as_deref())?)
            .with("page", check_page(self.page)?)
            .with("limit", check_limit(self.limit)?)
            .with("order_by", self.order_by)
            .with("sort", self.sort)
            .with("sfw", self.sfw))
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TopMangaParams {
    #[serde(rename = "type")]
    #[schemars(description = "Publication type filter")]
    pub kind: Option<MangaType>,
    #[schemars(description = "Ranking to use: publishing, upcoming, bypopularity or favorite")]
    pub filter: Option<TopMangaFilter>,
    #[schemars(description = "Page number, starting at 1")]
    pub page: Option<i64>,
    #[schemars(description = "Results per page (1-25)")]
    pub limit: Option<i64>,
}

impl TopMangaParams {
    pub fn query(&self) -> ToolResult<QueryParams> {
        Ok(QueryParams::new()
            .with("type", self.kind)
            .with("filter", self.filter)
            .with("page", check_page(self.page)?)
            .with("limit", check_limit(self.limit)?))
    }
}

/// Manga tools
pub struct MangaTools<T: HttpTransport> {
    client: Arc<JikanClient<T>>,
}

impl<T: HttpTransport> Clone for MangaTools<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: HttpTransport + 'static> MangaTools<T> {
    pub fn new(client: Arc<JikanClient<T>>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn search_manga(&self, params: SearchMangaParams) -> ToolResult<Page<Manga>> {
        let query = params.query()?;
        let body = self.client.fetch("/manga", query).await?;
        validate_list(&body)
    }

    #[instrument(skip(self))]
    pub async fn get_top_manga(&self, params: TopMangaParams) -> ToolResult<Page<Manga>> {
        let query = params.query()?;
        let body = self.client.fetch("/top/manga", query).await?;
        validate_list(&body)
    }

    #[instrument(skip(self))]
    pub async fn get_random_manga(&self) -> ToolResult<Manga> {
        let body = self
            .client
            .fetch("/random/manga", QueryParams::new())
            .await?;
        validate_item(&body)
    }

    #[instrument(skip(self))]
    pub async fn get_manga_reviews(
        &self,
        id: i64,
        params: ReviewParams,
    ) -> ToolResult<Page<Review>> {
        fetch_reviews(&self.client, "manga", id, &params).await
    }

    #[instrument(skip(self))]
    pub async fn get_similar_manga(&self, id: i64) -> ToolResult<Page<Recommendation>> {
        fetch_recommendations(&self.client, "manga", id).await
    }

    #[instrument(skip(self))]
    pub async fn get_manga_news(&self, id: i64, page: Option<i64>) -> ToolResult<Page<NewsItem>> {
        fetch_news(&self.client, "manga", id, page).await
    }

    pub fn register(&self, builder: &mut ToolRegistryBuilder) {
        let tools = self.clone();
        builder.register(
            "search_manga",
            "Search manga by title and filters (type, status, publication dates). \
             Returns a page of manga with pagination info.",
            move |params: SearchMangaParams| {
                let tools = tools.clone();
                async move { tools.search_manga(params).await }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_top_manga",
            "Get top-ranked manga, optionally filtered by type or ranking filter.",
            move |params: TopMangaParams| {
                let tools = tools.clone();
                async move { tools.get_top_manga(params).await }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_random_manga",
            "Get one random manga entry.",
            move |_: NoParams| {
                let tools = tools.clone();
                async move { tools.get_random_manga().await }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_manga_reviews",
            "Get user reviews for a manga by MyAnimeList ID.",
            move |request: ReviewsRequest| {
                let tools = tools.clone();
                async move {
                    let (id, params) = request.into_parts();
                    tools.get_manga_reviews(id, params).await
                }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_similar_manga",
            "Get manga that users recommend to fans of the given manga.",
            move |request: IdParams| {
                let tools = tools.clone();
                async move { tools.get_similar_manga(request.id).await }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_manga_news",
            "Get news articles about a manga by MyAnimeList ID.",
            move |request: NewsRequest| {
                let tools = tools.clone();
                async move { tools.get_manga_news(request.id, request.page).await }
            },
        );
    }
}

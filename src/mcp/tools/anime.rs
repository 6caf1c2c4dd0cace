//! Anime tool implementations
//!
//! Search, rankings, random picks, seasonal listings and the per-title
//! community endpoints (reviews, recommendations, news).

use std::sync::Arc;

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ToolError, ToolResult};
use crate::jikan::{HttpTransport, JikanClient, QueryParams};
use crate::mcp::registry::ToolRegistryBuilder;
use crate::models::{Anime, NewsItem, Page, Recommendation, Review, validate_item, validate_list};

use super::common::{
    IdParams, NewsRequest, NoParams, ReviewParams, ReviewsRequest, check_date, check_limit,
    check_page, check_query, fetch_news, fetch_recommendations, fetch_reviews,
};
use super::options::{
    AnimeOrderBy, AnimeRating, AnimeStatus, AnimeType, Season, SeasonFilter, SortDirection,
    TopAnimeFilter,
};

/// Earliest year MyAnimeList tracks seasons for.
pub const MIN_SEASON_YEAR: i64 = 1917;
pub const MAX_SEASON_YEAR: i64 = 2100;

#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchAnimeParams {
    #[schemars(description = "Search text matched against anime titles")]
    pub q: Option<String>,
    #[serde(rename = "type")]
    #[schemars(description = "Media type filter")]
    pub kind: Option<AnimeType>,
    #[schemars(description = "Airing status filter")]
    pub status: Option<AnimeStatus>,
    #[schemars(description = "Audience rating filter")]
    pub rating: Option<AnimeRating>,
    #[schemars(description = "Aired on or after this date (YYYY, YYYY-MM or YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[schemars(description = "Aired on or before this date (YYYY, YYYY-MM or YYYY-MM-DD)")]
    pub end_date: Option<String>,
    #[schemars(description = "Page number, starting at 1")]
    pub page: Option<i64>,
    #[schemars(description = "Results per page (1-25)")]
    pub limit: Option<i64>,
    #[schemars(description = "Field to order results by")]
    pub order_by: Option<AnimeOrderBy>,
    #[schemars(description = "Sort direction for order_by")]
    pub sort: Option<SortDirection>,
    #[schemars(description = "Exclude adult entries")]
    pub sfw: Option<bool>,
}

impl SearchAnimeParams {
    /// Validate and map to Jikan query parameters, in declaration order.
    pub fn query(&self) -> ToolResult<QueryParams> {
        Ok(QueryParams::new()
            .with("q", check_query(self.q.as_deref())?)
            .with("type", self.kind)
            .with("status", self.status)
            .with("rating", self.rating)
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
pub struct TopAnimeParams {
    #[serde(rename = "type")]
    #[schemars(description = "Media type filter")]
    pub kind: Option<AnimeType>,
    #[schemars(description = "Ranking to use: airing, upcoming, bypopularity or favorite")]
    pub filter: Option<TopAnimeFilter>,
    #[schemars(description = "Audience rating filter")]
    pub rating: Option<AnimeRating>,
    #[schemars(description = "Page number, starting at 1")]
    pub page: Option<i64>,
    #[schemars(description = "Results per page (1-25)")]
    pub limit: Option<i64>,
    #[schemars(description = "Exclude adult entries")]
    pub sfw: Option<bool>,
}

impl TopAnimeParams {
    pub fn query(&self) -> ToolResult<QueryParams> {
        Ok(QueryParams::new()
            .with("type", self.kind)
            .with("filter", self.filter)
            .with("rating", self.rating)
            .with("page", check_page(self.page)?)
            .with("limit", check_limit(self.limit)?)
            .with("sfw", self.sfw))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SeasonalAnimeParams {
    #[schemars(description = "Season year (1917-2100)")]
    pub year: i64,
    #[schemars(description = "Season: winter, spring, summer or fall")]
    pub season: Season,
    #[schemars(description = "Restrict to one media type")]
    pub filter: Option<SeasonFilter>,
    #[schemars(description = "Page number, starting at 1")]
    pub page: Option<i64>,
    #[schemars(description = "Results per page (1-25)")]
    pub limit: Option<i64>,
    #[schemars(description = "Exclude adult entries")]
    pub sfw: Option<bool>,
}

impl SeasonalAnimeParams {
    pub fn path(&self) -> ToolResult<String> {
        if !(MIN_SEASON_YEAR..=MAX_SEASON_YEAR).contains(&self.year) {
            return Err(ToolError::invalid_parameter(format!(
                "year must be between {} and {}, got {}",
                MIN_SEASON_YEAR, MAX_SEASON_YEAR, self.year
            )));
        }
        Ok(format!("/seasons/{}/{}", self.year, self.season))
    }

    pub fn query(&self) -> ToolResult<QueryParams> {
        Ok(QueryParams::new()
            .with("filter", self.filter)
            .with("page", check_page(self.page)?)
            .with("limit", check_limit(self.limit)?)
            .with("sfw", self.sfw))
    }
}

/// Anime tools
///
/// Generic over the HTTP transport so tests can drive them with a mock.
pub struct AnimeTools<T: HttpTransport> {
    client: Arc<JikanClient<T>>,
}

impl<T: HttpTransport> Clone for AnimeTools<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: HttpTransport + 'static> AnimeTools<T> {
    pub fn new(client: Arc<JikanClient<T>>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn search_anime(&self, params: SearchAnimeParams) -> ToolResult<Page<Anime>> {
        let query = params.query()?;
        let body = self.client.fetch("/anime", query).await?;
        validate_list(&body)
    }

    #[instrument(skip(self))]
    pub async fn get_top_anime(&self, params: TopAnimeParams) -> ToolResult<Page<Anime>> {
        let query = params.query()?;
        let body = self.client.fetch("/top/anime", query).await?;
        validate_list(&body)
    }

    #[instrument(skip(self))]
    pub async fn get_random_anime(&self) -> ToolResult<Anime> {
        let body = self
            .client
            .fetch("/random/anime", QueryParams::new())
            .await?;
        validate_item(&body)
    }

    #[instrument(skip(self))]
    pub async fn get_anime_reviews(
        &self,
        id: i64,
        params: ReviewParams,
    ) -> ToolResult<Page<Review>> {
        fetch_reviews(&self.client, "anime", id, &params).await
    }

    #[instrument(skip(self))]
    pub async fn get_similar_anime(&self, id: i64) -> ToolResult<Page<Recommendation>> {
        fetch_recommendations(&self.client, "anime", id).await
    }

    #[instrument(skip(self))]
    pub async fn get_anime_news(&self, id: i64, page: Option<i64>) -> ToolResult<Page<NewsItem>> {
        fetch_news(&self.client, "anime", id, page).await
    }

    #[instrument(skip(self))]
    pub async fn get_seasonal_anime(
        &self,
        params: SeasonalAnimeParams,
    ) -> ToolResult<Page<Anime>> {
        let path = params.path()?;
        let query = params.query()?;
        let body = self.client.fetch(&path, query).await?;
        validate_list(&body)
    }

    /// Add every anime tool to `builder`.
    pub fn register(&self, builder: &mut ToolRegistryBuilder) {
        let tools = self.clone();
        builder.register(
            "search_anime",
            "Search anime by title and filters (type, status, rating, air dates). \
             Returns a page of anime with pagination info.",
            move |params: SearchAnimeParams| {
                let tools = tools.clone();
                async move { tools.search_anime(params).await }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_top_anime",
            "Get top-ranked anime, optionally filtered by type, ranking filter or rating.",
            move |params: TopAnimeParams| {
                let tools = tools.clone();
                async move { tools.get_top_anime(params).await }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_random_anime",
            "Get one random anime entry.",
            move |_: NoParams| {
                let tools = tools.clone();
                async move { tools.get_random_anime().await }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_anime_reviews",
            "Get user reviews for an anime by MyAnimeList ID.",
            move |request: ReviewsRequest| {
                let tools = tools.clone();
                async move {
                    let (id, params) = request.into_parts();
                    tools.get_anime_reviews(id, params).await
                }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_similar_anime",
            "Get anime that users recommend to fans of the given anime.",
            move |request: IdParams| {
                let tools = tools.clone();
                async move { tools.get_similar_anime(request.id).await }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_anime_news",
            "Get news articles about an anime by MyAnimeList ID.",
            move |request: NewsRequest| {
                let tools = tools.clone();
                async move { tools.get_anime_news(request.id, request.page).await }
            },
        );

        let tools = self.clone();
        builder.register(
            "get_seasonal_anime",
            "Get anime airing in a given season (year plus winter/spring/summer/fall).",
            move |params: SeasonalAnimeParams| {
                let tools = tools.clone();
                async move { tools.get_seasonal_anime(params).await }
            },
        );
    }
}

//! Parameter types and checks shared by the anime and manga tools.

use chrono::NaiveDate;
use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};

use crate::error::{ToolError, ToolResult};
use crate::jikan::{HttpTransport, JikanClient, QueryParams};
use crate::models::{NewsItem, Page, Recommendation, Review, validate_list};

/// Largest page size Jikan accepts.
pub const MAX_LIMIT: i64 = 25;

const ID_DESC: &str = "MyAnimeList ID of the entry (positive integer)";
const PAGE_DESC: &str = "Page number, starting at 1";
const PRELIMINARY_DESC: &str =
    "Include preliminary reviews (written before the entry finished airing/publishing)";
const SPOILERS_DESC: &str = "Include reviews tagged as containing spoilers";

/// Parameters for tools that take no input.
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IdParams {
    #[schemars(description = ID_DESC)]
    pub id: i64,
}

/// Review filters.
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ReviewParams {
    #[schemars(description = PRELIMINARY_DESC)]
    pub preliminary: Option<bool>,
    #[schemars(description = SPOILERS_DESC)]
    pub spoilers: Option<bool>,
    #[schemars(description = PAGE_DESC)]
    pub page: Option<i64>,
}

impl ReviewParams {
    pub fn query(&self) -> ToolResult<QueryParams> {
        Ok(QueryParams::new()
            .with("preliminary", self.preliminary)
            .with("spoilers", self.spoilers)
            .with("page", check_page(self.page)?))
    }
}

/// Wire shape of the `get_*_reviews` tools.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ReviewsRequest {
    #[schemars(description = ID_DESC)]
    pub id: i64,
    #[schemars(description = PRELIMINARY_DESC)]
    pub preliminary: Option<bool>,
    #[schemars(description = SPOILERS_DESC)]
    pub spoilers: Option<bool>,
    #[schemars(description = PAGE_DESC)]
    pub page: Option<i64>,
}

impl ReviewsRequest {
    pub fn into_parts(self) -> (i64, ReviewParams) {
        (
            self.id,
            ReviewParams {
                preliminary: self.preliminary,
                spoilers: self.spoilers,
                page: self.page,
            },
        )
    }
}

/// Wire shape of the `get_*_news` tools.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NewsRequest {
    #[schemars(description = ID_DESC)]
    pub id: i64,
    #[schemars(description = PAGE_DESC)]
    pub page: Option<i64>,
}

/// Identifiers are forwarded upstream only when strictly positive.
pub fn require_id(id: i64) -> ToolResult<i64> {
    if id <= 0 {
        return Err(ToolError::invalid_parameter(format!(
            "id must be a positive integer, got {}",
            id
        )));
    }
    Ok(id)
}

pub fn check_page(page: Option<i64>) -> ToolResult<Option<i64>> {
    match page {
        Some(p) if p < 1 => Err(ToolError::invalid_parameter(format!(
            "page must be at least 1, got {}",
            p
        ))),
        other => Ok(other),
    }
}

pub fn check_limit(limit: Option<i64>) -> ToolResult<Option<i64>> {
    match limit {
        Some(l) if !(1..=MAX_LIMIT).contains(&l) => Err(ToolError::invalid_parameter(format!(
            "limit must be between 1 and {}, got {}",
            MAX_LIMIT, l
        ))),
        other => Ok(other),
    }
}

/// Search text must not be blank when given.
pub fn check_query<'a>(q: Option<&'a str>) -> ToolResult<Option<&'a str>> {
    match q {
        Some(text) if text.trim().is_empty() => {
            Err(ToolError::invalid_parameter("q must not be blank"))
        }
        other => Ok(other),
    }
}

/// Accepts `YYYY`, `YYYY-MM` or `YYYY-MM-DD`, the formats Jikan understands.
pub fn check_date<'a>(field: &str, value: Option<&'a str>) -> ToolResult<Option<&'a str>> {
    let Some(text) = value else {
        return Ok(None);
    };
    if is_partial_date(text) {
        Ok(Some(text))
    } else {
        Err(ToolError::invalid_parameter(format!(
            "{} must be formatted as YYYY, YYYY-MM or YYYY-MM-DD, got '{}'",
            field, text
        )))
    }
}

fn is_partial_date(text: &str) -> bool {
    let digits = |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());
    let parts: Vec<&str> = text.split('-').collect();
    match parts.as_slice() {
        [year] => digits(year, 4),
        [year, month] => {
            digits(year, 4) && digits(month, 2) && matches!(month.parse::<u32>(), Ok(1..=12))
        }
        [year, month, day] => {
            digits(year, 4)
                && digits(month, 2)
                && digits(day, 2)
                && NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
        }
        _ => false,
    }
}

pub(crate) async fn fetch_reviews<T: HttpTransport>(
    client: &JikanClient<T>,
    category: &str,
    id: i64,
    params: &ReviewParams,
) -> ToolResult<Page<Review>> {
    let id = require_id(id)?;
    let query = params.query()?;
    let body = client
        .fetch(&format!("/{}/{}/reviews", category, id), query)
        .await?;
    validate_list(&body)
}

pub(crate) async fn fetch_recommendations<T: HttpTransport>(
    client: &JikanClient<T>,
    category: &str,
    id: i64,
) -> ToolResult<Page<Recommendation>> {
    let id = require_id(id)?;
    let body = client
        .fetch(
            &format!("/{}/{}/recommendations", category, id),
            QueryParams::new(),
        )
        .await?;
    validate_list(&body)
}

pub(crate) async fn fetch_news<T: HttpTransport>(
    client: &JikanClient<T>,
    category: &str,
    id: i64,
    page: Option<i64>,
) -> ToolResult<Page<NewsItem>> {
    let id = require_id(id)?;
    let query = QueryParams::new().with("page", check_page(page)?);
    let body = client
        .fetch(&format!("/{}/{}/news", category, id), query)
        .await?;
    validate_list(&body)
}

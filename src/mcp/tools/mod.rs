//! MCP tool implementations
//!
//! Tool handlers organized by entity type. Each handler validates its
//! parameters, maps them to a Jikan path and query, and validates the
//! response through `crate::models`.

mod anime;
mod common;
mod manga;
#[cfg(test)]
mod manga_test;
mod options;
mod producers;

use std::sync::Arc;

pub use anime::{
    AnimeTools, MAX_SEASON_YEAR, MIN_SEASON_YEAR, SearchAnimeParams, SeasonalAnimeParams,
    TopAnimeParams,
};
pub use common::{
    IdParams, MAX_LIMIT, NewsRequest, NoParams, ReviewParams, ReviewsRequest, check_date,
    check_limit, check_page, check_query, require_id,
};
pub use manga::{MangaTools, SearchMangaParams, TopMangaParams};
pub use options::{
    AnimeOrderBy, AnimeRating, AnimeStatus, AnimeType, MangaOrderBy, MangaStatus, MangaType,
    ProducerOrderBy, Season, SeasonFilter, SortDirection, TopAnimeFilter, TopMangaFilter,
};
pub use producers::{ProducerParams, ProducerTools};

use crate::jikan::{HttpTransport, JikanClient};

use super::registry::ToolRegistry;

/// Register every MAL tool against one shared client.
pub fn build_registry<T: HttpTransport + 'static>(client: Arc<JikanClient<T>>) -> ToolRegistry {
    let mut builder = ToolRegistry::builder();
    AnimeTools::new(Arc::clone(&client)).register(&mut builder);
    MangaTools::new(Arc::clone(&client)).register(&mut builder);
    ProducerTools::new(client).register(&mut builder);
    builder.build()
}

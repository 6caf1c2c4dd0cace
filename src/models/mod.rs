//! Response models for Jikan payloads.
//!
//! Each category decodes the upstream record (`*Record`, private) and
//! projects it into the public entity returned to callers. Unknown upstream
//! fields are ignored; a missing required field or a wrong type fails the
//! whole response.
//!
//! - `anime`: Anime
//! - `manga`: Manga
//! - `producer`: Producer
//! - `community`: Review, NewsItem, Recommendation
//! - `envelope`: the `data`/`pagination` wrapper and the `Entity` trait

mod anime;
mod community;
mod envelope;
mod manga;
mod producer;

#[cfg(test)]
pub(crate) mod fixtures;

pub use anime::Anime;
pub use community::{NewsItem, Recommendation, Review};
pub use envelope::{Entity, Page, Pagination, PaginationItems, validate_item, validate_list};
pub use manga::Manga;
pub use producer::Producer;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Reference to another MAL resource (producer, studio, genre, author...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub mal_id: i64,
    pub name: String,
}

/// Upstream `aired` / `published` object.
#[derive(Debug, Clone, Default, Deserialize)]
struct DateRange {
    #[serde(default)]
    from: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    to: Option<DateTime<FixedOffset>>,
}

impl DateRange {
    fn start(&self) -> Option<NaiveDate> {
        self.from.map(|d| d.date_naive())
    }

    fn end(&self) -> Option<NaiveDate> {
        self.to.map(|d| d.date_naive())
    }
}

/// Upstream `{mal_id, type, name, url}` reference.
#[derive(Debug, Clone, Deserialize)]
struct EntityRef {
    mal_id: i64,
    name: String,
}

fn into_refs(refs: Vec<EntityRef>) -> Vec<NamedRef> {
    refs.into_iter()
        .map(|r| NamedRef {
            mal_id: r.mal_id,
            name: r.name,
        })
        .collect()
}

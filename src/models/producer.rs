use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::envelope::Entity;

#[derive(Debug, Deserialize)]
struct ProducerTitle {
    #[serde(rename = "type")]
    kind: String,
    title: String,
}

#[derive(Debug, Deserialize)]
pub struct ProducerRecord {
    mal_id: i64,
    url: Option<String>,
    #[serde(default)]
    titles: Vec<ProducerTitle>,
    established: Option<DateTime<FixedOffset>>,
    about: Option<String>,
    favorites: Option<u64>,
    count: Option<u64>,
}

/// A validated producer (studio, licensor, publisher).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Producer {
    pub mal_id: i64,
    pub url: Option<String>,
    /// The `Default` title, falling back to the first listed.
    pub name: Option<String>,
    pub titles: Vec<String>,
    pub established: Option<NaiveDate>,
    pub about: Option<String>,
    pub favorites: Option<u64>,
    /// Number of entries credited to this producer.
    pub count: Option<u64>,
}

impl Entity for Producer {
    type Record = ProducerRecord;
    const CATEGORY: &'static str = "producer";

    fn from_record(r: ProducerRecord) -> Self {
        let name = r
            .titles
            .iter()
            .find(|t| t.kind == "Default")
            .or_else(|| r.titles.first())
            .map(|t| t.title.clone());

        Self {
            mal_id: r.mal_id,
            url: r.url,
            name,
            titles: r.titles.into_iter().map(|t| t.title).collect(),
            established: r.established.map(|d| d.date_naive()),
            about: r.about,
            favorites: r.favorites,
            count: r.count,
        }
    }
}

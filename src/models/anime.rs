use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::envelope::Entity;
use super::{DateRange, EntityRef, NamedRef, into_refs};

#[derive(Debug, Deserialize)]
pub struct AnimeRecord {
    mal_id: i64,
    url: Option<String>,
    title: String,
    title_english: Option<String>,
    title_japanese: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    source: Option<String>,
    episodes: Option<u32>,
    status: Option<String>,
    airing: Option<bool>,
    aired: Option<DateRange>,
    duration: Option<String>,
    rating: Option<String>,
    score: Option<f64>,
    scored_by: Option<u64>,
    rank: Option<u32>,
    popularity: Option<u32>,
    members: Option<u64>,
    favorites: Option<u64>,
    synopsis: Option<String>,
    background: Option<String>,
    season: Option<String>,
    year: Option<i32>,
    #[serde(default)]
    producers: Vec<EntityRef>,
    #[serde(default)]
    studios: Vec<EntityRef>,
    #[serde(default)]
    genres: Vec<EntityRef>,
}

/// A validated anime entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anime {
    pub mal_id: i64,
    pub url: Option<String>,
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub source: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub airing: Option<bool>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub duration: Option<String>,
    pub rating: Option<String>,
    pub score: Option<f64>,
    pub scored_by: Option<u64>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub members: Option<u64>,
    pub favorites: Option<u64>,
    pub synopsis: Option<String>,
    pub background: Option<String>,
    pub season: Option<String>,
    pub year: Option<i32>,
    pub producers: Vec<NamedRef>,
    pub studios: Vec<NamedRef>,
    pub genres: Vec<NamedRef>,
}

impl Entity for Anime {
    type Record = AnimeRecord;
    const CATEGORY: &'static str = "anime";

    fn from_record(r: AnimeRecord) -> Self {
        let aired = r.aired.unwrap_or_default();
        Self {
            mal_id: r.mal_id,
            url: r.url,
            title: r.title,
            title_english: r.title_english,
            title_japanese: r.title_japanese,
            kind: r.kind,
            source: r.source,
            episodes: r.episodes,
            status: r.status,
            airing: r.airing,
            start_date: aired.start(),
            end_date: aired.end(),
            duration: r.duration,
            rating: r.rating,
            score: r.score,
            scored_by: r.scored_by,
            rank: r.rank,
            popularity: r.popularity,
            members: r.members,
            favorites: r.favorites,
            synopsis: r.synopsis,
            background: r.background,
            season: r.season,
            year: r.year,
            producers: into_refs(r.producers),
            studios: into_refs(r.studios),
            genres: into_refs(r.genres),
        }
    }
}

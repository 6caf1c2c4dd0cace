use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::envelope::Entity;
use super::{DateRange, EntityRef, NamedRef, into_refs};

#[derive(Debug, Deserialize)]
pub struct MangaRecord {
    mal_id: i64,
    url: Option<String>,
    title: String,
    title_english: Option<String>,
    title_japanese: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    chapters: Option<u32>,
    volumes: Option<u32>,
    status: Option<String>,
    publishing: Option<bool>,
    published: Option<DateRange>,
    score: Option<f64>,
    scored_by: Option<u64>,
    rank: Option<u32>,
    popularity: Option<u32>,
    members: Option<u64>,
    favorites: Option<u64>,
    synopsis: Option<String>,
    background: Option<String>,
    #[serde(default)]
    authors: Vec<EntityRef>,
    #[serde(default)]
    serializations: Vec<EntityRef>,
    #[serde(default)]
    genres: Vec<EntityRef>,
}

/// A validated manga entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manga {
    pub mal_id: i64,
    pub url: Option<String>,
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub chapters: Option<u32>,
    pub volumes: Option<u32>,
    pub status: Option<String>,
    pub publishing: Option<bool>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub score: Option<f64>,
    pub scored_by: Option<u64>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub members: Option<u64>,
    pub favorites: Option<u64>,
    pub synopsis: Option<String>,
    pub background: Option<String>,
    pub authors: Vec<NamedRef>,
    pub serializations: Vec<NamedRef>,
    pub genres: Vec<NamedRef>,
}

impl Entity for Manga {
    type Record = MangaRecord;
    const CATEGORY: &'static str = "manga";

    fn from_record(r: MangaRecord) -> Self {
        let published = r.published.unwrap_or_default();
        Self {
            mal_id: r.mal_id,
            url: r.url,
            title: r.title,
            title_english: r.title_english,
            title_japanese: r.title_japanese,
            kind: r.kind,
            chapters: r.chapters,
            volumes: r.volumes,
            status: r.status,
            publishing: r.publishing,
            start_date: published.start(),
            end_date: published.end(),
            score: r.score,
            scored_by: r.scored_by,
            rank: r.rank,
            popularity: r.popularity,
            members: r.members,
            favorites: r.favorites,
            synopsis: r.synopsis,
            background: r.background,
            authors: into_refs(r.authors),
            serializations: into_refs(r.serializations),
            genres: into_refs(r.genres),
        }
    }
}

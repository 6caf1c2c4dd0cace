//! User-generated and editorial resources: reviews, news, recommendations.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::envelope::Entity;

#[derive(Debug, Deserialize)]
struct ReviewUser {
    username: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRecord {
    mal_id: i64,
    url: Option<String>,
    date: DateTime<FixedOffset>,
    review: String,
    score: Option<u8>,
    #[serde(default)]
    tags: Vec<String>,
    is_spoiler: Option<bool>,
    is_preliminary: Option<bool>,
    user: Option<ReviewUser>,
}

/// A validated user review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub mal_id: i64,
    pub url: Option<String>,
    pub date: DateTime<FixedOffset>,
    pub review: String,
    pub score: Option<u8>,
    pub tags: Vec<String>,
    pub is_spoiler: Option<bool>,
    pub is_preliminary: Option<bool>,
    pub username: Option<String>,
}

impl Entity for Review {
    type Record = ReviewRecord;
    const CATEGORY: &'static str = "review";

    fn from_record(r: ReviewRecord) -> Self {
        Self {
            mal_id: r.mal_id,
            url: r.url,
            date: r.date,
            review: r.review,
            score: r.score,
            tags: r.tags,
            is_spoiler: r.is_spoiler,
            is_preliminary: r.is_preliminary,
            username: r.user.map(|u| u.username),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewsRecord {
    mal_id: i64,
    url: Option<String>,
    title: String,
    date: Option<DateTime<FixedOffset>>,
    author_username: Option<String>,
    author_url: Option<String>,
    forum_url: Option<String>,
    excerpt: Option<String>,
    comments: Option<u32>,
}

/// A validated news article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub mal_id: i64,
    pub url: Option<String>,
    pub title: String,
    pub date: Option<DateTime<FixedOffset>>,
    pub author_username: Option<String>,
    pub author_url: Option<String>,
    pub forum_url: Option<String>,
    pub excerpt: Option<String>,
    pub comments: Option<u32>,
}

impl Entity for NewsItem {
    type Record = NewsRecord;
    const CATEGORY: &'static str = "news";

    fn from_record(r: NewsRecord) -> Self {
        Self {
            mal_id: r.mal_id,
            url: r.url,
            title: r.title,
            date: r.date,
            author_username: r.author_username,
            author_url: r.author_url,
            forum_url: r.forum_url,
            excerpt: r.excerpt,
            comments: r.comments,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecommendedEntry {
    mal_id: i64,
    url: Option<String>,
    title: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRecord {
    entry: RecommendedEntry,
    votes: Option<u32>,
}

/// An entry users recommend alongside the requested one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub mal_id: i64,
    pub title: String,
    pub url: Option<String>,
    pub votes: Option<u32>,
}

impl Entity for Recommendation {
    type Record = RecommendationRecord;
    const CATEGORY: &'static str = "recommendation";

    fn from_record(r: RecommendationRecord) -> Self {
        Self {
            mal_id: r.entry.mal_id,
            title: r.entry.title,
            url: r.entry.url,
            votes: r.votes,
        }
    }
}

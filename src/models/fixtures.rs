//! Sample Jikan payloads shared by tests.

use serde_json::{Value, json};

pub fn anime(mal_id: i64, title: &str) -> Value {
    json!({
        "mal_id": mal_id,
        "url": format!("https://myanimelist.net/anime/{}", mal_id),
        "images": {"jpg": {"image_url": "https://cdn.myanimelist.net/images/anime/13/17405.jpg"}},
        "approved": true,
        "titles": [{"type": "Default", "title": title}],
        "title": title,
        "title_english": title,
        "title_japanese": "ナルト",
        "type": "TV",
        "source": "Manga",
        "episodes": 220,
        "status": "Finished Airing",
        "airing": false,
        "aired": {
            "from": "2002-10-03T00:00:00+00:00",
            "to": "2007-02-08T00:00:00+00:00",
            "string": "Oct 3, 2002 to Feb 8, 2007"
        },
        "duration": "23 min per ep",
        "rating": "PG-13 - Teens 13 or older",
        "score": 8.0,
        "scored_by": 2012134,
        "rank": 660,
        "popularity": 8,
        "members": 2912345,
        "favorites": 79000,
        "synopsis": "Moments prior to Naruto Uzumaki's birth...",
        "background": null,
        "season": "fall",
        "year": 2002,
        "producers": [
            {"mal_id": 16, "type": "anime", "name": "TV Tokyo", "url": "https://myanimelist.net/anime/producer/16"}
        ],
        "studios": [
            {"mal_id": 1, "type": "anime", "name": "Pierrot", "url": "https://myanimelist.net/anime/producer/1"}
        ],
        "genres": [
            {"mal_id": 1, "type": "anime", "name": "Action", "url": "https://myanimelist.net/anime/genre/1"}
        ]
    })
}

pub fn manga(mal_id: i64, title: &str) -> Value {
    json!({
        "mal_id": mal_id,
        "url": format!("https://myanimelist.net/manga/{}", mal_id),
        "title": title,
        "title_english": null,
        "title_japanese": "ベルセルク",
        "type": "Manga",
        "chapters": null,
        "volumes": null,
        "status": "Publishing",
        "publishing": true,
        "published": {
            "from": "1989-08-25T00:00:00+00:00",
            "to": null
        },
        "score": 9.47,
        "scored_by": 351000,
        "rank": 1,
        "popularity": 1,
        "members": 740000,
        "favorites": 130000,
        "synopsis": "Guts, a former mercenary...",
        "background": null,
        "authors": [
            {"mal_id": 1868, "type": "people", "name": "Miura, Kentarou", "url": "https://myanimelist.net/people/1868"}
        ],
        "serializations": [
            {"mal_id": 2, "type": "manga", "name": "Young Animal", "url": "https://myanimelist.net/manga/magazine/2"}
        ],
        "genres": [
            {"mal_id": 1, "type": "manga", "name": "Action", "url": "https://myanimelist.net/manga/genre/1"}
        ]
    })
}

pub fn producer(mal_id: i64) -> Value {
    json!({
        "mal_id": mal_id,
        "url": format!("https://myanimelist.net/anime/producer/{}", mal_id),
        "titles": [
            {"type": "Japanese", "title": "東映アニメーション"},
            {"type": "Default", "title": "Toei Animation"}
        ],
        "images": {"jpg": {"image_url": "https://cdn.myanimelist.net/images/company/18.png"}},
        "favorites": 4500,
        "established": "1948-01-23T00:00:00+00:00",
        "about": "Toei Animation Co., Ltd. is a Japanese animation studio.",
        "count": 900
    })
}

pub fn review(mal_id: i64) -> Value {
    json!({
        "mal_id": mal_id,
        "url": format!("https://myanimelist.net/reviews.php?id={}", mal_id),
        "type": "anime",
        "reactions": {"overall": 120},
        "date": "2023-01-05T01:56:00+00:00",
        "review": "A classic that still holds up.",
        "score": 9,
        "tags": ["Recommended"],
        "is_spoiler": false,
        "is_preliminary": false,
        "episodes_watched": null,
        "user": {"username": "reviewer42", "url": "https://myanimelist.net/profile/reviewer42"}
    })
}

pub fn news(mal_id: i64) -> Value {
    json!({
        "mal_id": mal_id,
        "url": format!("https://myanimelist.net/news/{}", mal_id),
        "title": "New Anime Announced",
        "date": "2024-03-10T12:00:00+00:00",
        "author_username": "newsbot",
        "author_url": "https://myanimelist.net/profile/newsbot",
        "forum_url": "https://myanimelist.net/forum/?topicid=1",
        "images": {"jpg": {"image_url": null}},
        "comments": 12,
        "excerpt": "The official website announced..."
    })
}

pub fn recommendation(mal_id: i64, title: &str) -> Value {
    json!({
        "entry": {
            "mal_id": mal_id,
            "url": format!("https://myanimelist.net/anime/{}", mal_id),
            "images": {"jpg": {"image_url": null}},
            "title": title
        },
        "url": "https://myanimelist.net/recommendations/anime/20-1735",
        "votes": 57
    })
}

pub fn pagination() -> Value {
    json!({
        "last_visible_page": 4,
        "has_next_page": true,
        "current_page": 1,
        "items": {"count": 2, "total": 80, "per_page": 25}
    })
}

/// `{"data": [...], "pagination": {...}}`
pub fn list(items: Vec<Value>) -> Value {
    json!({ "data": items, "pagination": pagination() })
}

/// `{"data": {...}}`
pub fn item(data: Value) -> Value {
    json!({ "data": data })
}

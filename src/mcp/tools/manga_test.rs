//! Tests for manga MCP tools

use std::sync::Arc;

use mockall::Sequence;

use crate::error::ToolError;
use crate::jikan::{HttpResponse, JikanClient, MockHttpTransport};
use crate::mcp::tools::{
    MangaOrderBy, MangaStatus, MangaTools, MangaType, ReviewParams, SearchMangaParams,
    SortDirection, TopMangaFilter, TopMangaParams,
};
use crate::models::fixtures;

fn tools(transport: MockHttpTransport) -> MangaTools<MockHttpTransport> {
    MangaTools::new(Arc::new(JikanClient::new("http://jikan.test/v4", transport)))
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_search_manga_maps_filters() {
    let body = fixtures::list(vec![fixtures::manga(2, "Berserk")]).to_string();
    let mut transport = MockHttpTransport::new();
    transport
        .expect_get()
        .withf(|req| {
            req.url == "http://jikan.test/v4/manga"
                && req.query
                    == pairs(&[
                        ("q", "berserk"),
                        ("type", "manga"),
                        ("status", "publishing"),
                        ("start_date", "1989-08"),
                        ("order_by", "members"),
                        ("sort", "desc"),
                    ])
        })
        .times(1)
        .returning(move |_| Ok(HttpResponse::new(200, body.clone())));

    let params = SearchMangaParams {
        q: Some("berserk".to_string()),
        kind: Some(MangaType::Manga),
        status: Some(MangaStatus::Publishing),
        start_date: Some("1989-08".to_string()),
        order_by: Some(MangaOrderBy::Members),
        sort: Some(SortDirection::Desc),
        ..Default::default()
    };
    let page = tools(transport).search_manga(params).await.unwrap();

    assert_eq!(page.items[0].title, "Berserk");
    assert_eq!(page.items[0].authors[0].name, "Miura, Kentarou");
}

#[tokio::test]
async fn test_search_manga_rejects_bad_dates() {
    let mut transport = MockHttpTransport::new();
    transport.expect_get().never();

    let params = SearchMangaParams {
        end_date: Some("1989-8-25".to_string()),
        ..Default::default()
    };
    let err = tools(transport).search_manga(params).await.unwrap_err();

    assert_eq!(err.kind(), "invalid_parameter");
    assert!(err.to_string().contains("end_date"));
}

#[tokio::test]
async fn test_get_top_manga_maps_filter() {
    let body = fixtures::list(vec![fixtures::manga(2, "Berserk")]).to_string();
    let mut transport = MockHttpTransport::new();
    transport
        .expect_get()
        .withf(|req| {
            req.url == "http://jikan.test/v4/top/manga"
                && req.query == pairs(&[("type", "lightnovel"), ("filter", "favorite")])
        })
        .times(1)
        .returning(move |_| Ok(HttpResponse::new(200, body.clone())));

    let params = TopMangaParams {
        kind: Some(MangaType::LightNovel),
        filter: Some(TopMangaFilter::Favorite),
        ..Default::default()
    };
    let page = tools(transport).get_top_manga(params).await.unwrap();
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_get_random_manga_returns_each_payload() {
    let first = fixtures::item(fixtures::manga(2, "Berserk")).to_string();
    let second = fixtures::item(fixtures::manga(13, "One Piece")).to_string();

    let mut seq = Sequence::new();
    let mut transport = MockHttpTransport::new();
    transport
        .expect_get()
        .withf(|req| req.url == "http://jikan.test/v4/random/manga")
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_| Ok(HttpResponse::new(200, first.clone())));
    transport
        .expect_get()
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_| Ok(HttpResponse::new(200, second.clone())));

    let tools = tools(transport);
    let a = tools.get_random_manga().await.unwrap();
    let b = tools.get_random_manga().await.unwrap();

    assert_eq!(a.title, "Berserk");
    assert_eq!(b.title, "One Piece");
}

#[tokio::test]
async fn test_get_manga_reviews_path() {
    let body = fixtures::list(vec![fixtures::review(3)]).to_string();
    let mut transport = MockHttpTransport::new();
    transport
        .expect_get()
        .withf(|req| {
            req.url == "http://jikan.test/v4/manga/2/reviews" && req.query == pairs(&[("page", "2")])
        })
        .times(1)
        .returning(move |_| Ok(HttpResponse::new(200, body.clone())));

    let params = ReviewParams {
        page: Some(2),
        ..Default::default()
    };
    let page = tools(transport).get_manga_reviews(2, params).await.unwrap();
    assert_eq!(page.items[0].score, Some(9));
}

#[tokio::test]
async fn test_get_similar_and_news_paths() {
    let recs = serde_json::json!({"data": [fixtures::recommendation(13, "One Piece")]}).to_string();
    let news = fixtures::list(vec![fixtures::news(5)]).to_string();

    let mut transport = MockHttpTransport::new();
    transport
        .expect_get()
        .withf(|req| req.url == "http://jikan.test/v4/manga/2/recommendations")
        .times(1)
        .returning(move |_| Ok(HttpResponse::new(200, recs.clone())));
    transport
        .expect_get()
        .withf(|req| req.url == "http://jikan.test/v4/manga/2/news" && req.query.is_empty())
        .times(1)
        .returning(move |_| Ok(HttpResponse::new(200, news.clone())));

    let tools = tools(transport);
    let similar = tools.get_similar_manga(2).await.unwrap();
    let articles = tools.get_manga_news(2, None).await.unwrap();

    assert_eq!(similar.items[0].mal_id, 13);
    assert_eq!(articles.items[0].mal_id, 5);
}

#[tokio::test]
async fn test_manga_id_tools_reject_zero() {
    let mut transport = MockHttpTransport::new();
    transport.expect_get().never();
    let tools = tools(transport);

    assert!(matches!(
        tools.get_manga_reviews(0, ReviewParams::default()).await,
        Err(ToolError::InvalidParameter { .. })
    ));
    assert!(matches!(
        tools.get_similar_manga(0).await,
        Err(ToolError::InvalidParameter { .. })
    ));
    assert!(matches!(
        tools.get_manga_news(-3, Some(1)).await,
        Err(ToolError::InvalidParameter { .. })
    ));
}

#[tokio::test]
async fn test_manga_tools_report_upstream_500() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_get()
        .returning(|_| Ok(HttpResponse::new(500, "oops")));
    let tools = tools(transport);

    let results = vec![
        tools.search_manga(SearchMangaParams::default()).await.map(|_| ()),
        tools.get_top_manga(TopMangaParams::default()).await.map(|_| ()),
        tools.get_random_manga().await.map(|_| ()),
        tools
            .get_manga_reviews(2, ReviewParams::default())
            .await
            .map(|_| ()),
        tools.get_similar_manga(2).await.map(|_| ()),
        tools.get_manga_news(2, None).await.map(|_| ()),
    ];

    for result in results {
        assert!(matches!(
            result,
            Err(ToolError::Upstream { status: 500, .. })
        ));
    }
}

#[tokio::test]
async fn test_manga_tools_report_malformed_json() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_get()
        .returning(|_| Ok(HttpResponse::new(200, "")));
    let tools = tools(transport);

    let results = vec![
        tools.search_manga(SearchMangaParams::default()).await.map(|_| ()),
        tools.get_random_manga().await.map(|_| ()),
        tools.get_similar_manga(2).await.map(|_| ()),
    ];

    for result in results {
        assert!(matches!(result, Err(ToolError::Decode { .. })));
    }
}

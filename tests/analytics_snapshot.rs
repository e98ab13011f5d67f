//! Dashboard snapshot: internally consistent counts and bounded lists.

mod common;

use common::Fixture;
use pressroom_core::state_machine::ArticleStatus;

#[tokio::test]
async fn snapshot_counts_reflect_one_instant() {
    let fixture = Fixture::new();
    let aggregator = fixture.analytics();
    let module = fixture.repository.seed_module("guides", "Guides", 0);
    fixture.repository.seed_topic(module.id, "rust", "Rust", 0);
    fixture.repository.seed_topic(module.id, "sql", "SQL", 1);
    fixture
        .repository
        .seed_article("one", "One", ArticleStatus::Published);
    fixture
        .repository
        .seed_article("two", "Two", ArticleStatus::Draft);
    fixture
        .repository
        .seed_article("three", "Three", ArticleStatus::Archived);
    fixture.repository.seed_media("/uploads/a.png");
    fixture.repository.seed_menu("Home", 0);
    fixture.repository.seed_ai_log(None, "summary");

    let snapshot = aggregator.snapshot().await.unwrap();

    assert_eq!(snapshot.stats.total_modules, 1);
    assert_eq!(snapshot.stats.total_topics, 2);
    assert_eq!(snapshot.stats.published_articles, 1);
    assert_eq!(snapshot.stats.draft_articles, 1);
    assert_eq!(snapshot.stats.total_media, 1);
    assert_eq!(snapshot.stats.total_menus, 1);
    assert_eq!(snapshot.stats.total_sub_menus, 0);
    assert_eq!(snapshot.stats.ai_usage, 1);

    // Status buckets never exceed the article population.
    assert!(
        snapshot.stats.published_articles + snapshot.stats.draft_articles
            <= fixture.repository.article_count() as i64
    );
}

#[tokio::test]
async fn recent_articles_are_limited_and_newest_first() {
    let fixture = Fixture::new();
    let aggregator = fixture.analytics();
    for i in 0..14 {
        let slug = format!("article-{i}");
        fixture
            .repository
            .seed_article(&slug, "Article", ArticleStatus::Draft);
    }

    let snapshot = aggregator.snapshot().await.unwrap();

    assert_eq!(snapshot.recent_articles.len(), 10);
    for window in snapshot.recent_articles.windows(2) {
        assert!(window[0].updated_at >= window[1].updated_at);
    }
}

#[tokio::test]
async fn recent_article_carries_its_first_topic() {
    let fixture = Fixture::new();
    let aggregator = fixture.analytics();
    let module = fixture.repository.seed_module("guides", "Guides", 0);
    let primary = fixture.repository.seed_topic(module.id, "rust", "Rust", 0);
    let secondary = fixture.repository.seed_topic(module.id, "sql", "SQL", 1);
    let article = fixture
        .repository
        .seed_article("topical", "Topical", ArticleStatus::Published);
    // Linked out of order; the lowest order_index wins.
    fixture.repository.link_topic(article.id, secondary.id, 1);
    fixture.repository.link_topic(article.id, primary.id, 0);

    let snapshot = aggregator.snapshot().await.unwrap();

    let recent = snapshot
        .recent_articles
        .iter()
        .find(|a| a.id == article.id)
        .unwrap();
    assert_eq!(recent.topic_name.as_deref(), Some("Rust"));
    assert_eq!(recent.topic_slug.as_deref(), Some("rust"));
    assert!(recent.topic_color.is_some());
}

#[tokio::test]
async fn article_without_topics_has_no_topic_fields() {
    let fixture = Fixture::new();
    let aggregator = fixture.analytics();
    let article = fixture
        .repository
        .seed_article("bare", "Bare", ArticleStatus::Draft);

    let snapshot = aggregator.snapshot().await.unwrap();

    let recent = snapshot
        .recent_articles
        .iter()
        .find(|a| a.id == article.id)
        .unwrap();
    assert_eq!(recent.topic_name, None);
    assert_eq!(recent.topic_slug, None);
}

#[tokio::test]
async fn ai_logs_are_limited_and_resolve_article_titles() {
    let fixture = Fixture::new();
    let aggregator = fixture.analytics();
    let article = fixture
        .repository
        .seed_article("assisted", "Assisted", ArticleStatus::Draft);
    for _ in 0..6 {
        fixture.repository.seed_ai_log(Some(article.id), "rewrite");
    }
    fixture.repository.seed_ai_log(None, "brainstorm");

    let snapshot = aggregator.snapshot().await.unwrap();

    assert_eq!(snapshot.ai_logs.len(), 5);
    for window in snapshot.ai_logs.windows(2) {
        assert!(window[0].created_at >= window[1].created_at);
    }
    // Newest log first: the detached brainstorm entry.
    assert_eq!(snapshot.ai_logs[0].article_title, None);
    assert_eq!(
        snapshot.ai_logs[1].article_title.as_deref(),
        Some("Assisted")
    );
}

#[tokio::test]
async fn empty_database_yields_zeroes_and_empty_lists() {
    let fixture = Fixture::new();
    let aggregator = fixture.analytics();

    let snapshot = aggregator.snapshot().await.unwrap();

    assert_eq!(snapshot.stats.total_modules, 0);
    assert_eq!(snapshot.stats.published_articles, 0);
    assert!(snapshot.recent_articles.is_empty());
    assert!(snapshot.ai_logs.is_empty());
}

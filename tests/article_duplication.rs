//! Deep duplication: the clone carries content and associations, never
//! identity or lifecycle state.

mod common;

use common::Fixture;
use pressroom_core::error::CmsError;
use pressroom_core::models::CallerIdentity;
use pressroom_core::state_machine::{ArticleStatus, PublishAction};

fn editor() -> CallerIdentity {
    CallerIdentity {
        user_id: 7,
        name: "Robin".to_string(),
        role: "EDITOR".to_string(),
    }
}

#[tokio::test]
async fn duplicate_clones_content_and_associations() {
    let fixture = Fixture::new();
    let service = fixture.duplication();
    let module = fixture.repository.seed_module("guides", "Guides", 0);
    let t1 = fixture.repository.seed_topic(module.id, "rust", "Rust", 0);
    let t2 = fixture.repository.seed_topic(module.id, "sql", "SQL", 1);
    let source = fixture
        .repository
        .seed_article("borrow-checker", "The borrow checker", ArticleStatus::Published);
    fixture.repository.link_topic(source.id, t1.id, 0);
    fixture.repository.link_topic(source.id, t2.id, 1);
    fixture.repository.link_tag(source.id, 501);
    fixture.repository.link_tag(source.id, 502);
    fixture.repository.link_tag(source.id, 503);

    let copy = service.duplicate(source.id, &editor()).await.unwrap();

    assert_ne!(copy.id, source.id);
    assert_eq!(copy.title, "The borrow checker (Copy)");
    assert!(copy.slug.starts_with("borrow-checker-copy-"));
    assert_ne!(copy.slug, source.slug);
    assert_eq!(copy.content, source.content);
    assert_eq!(copy.summary, source.summary);
    assert_eq!(copy.reading_time_minutes, source.reading_time_minutes);

    let (topics, tags) = fixture.repository.association_counts(copy.id);
    assert_eq!((topics, tags), (2, 3));
}

#[tokio::test]
async fn duplicate_is_always_an_unpublished_draft_owned_by_caller() {
    let fixture = Fixture::new();
    let service = fixture.duplication();
    let engine = fixture.transition_engine();
    let source = fixture
        .repository
        .seed_article("evergreen", "Evergreen", ArticleStatus::Draft);
    engine
        .transition(source.id, PublishAction::Publish, None)
        .await
        .unwrap();

    let copy = service.duplicate(source.id, &editor()).await.unwrap();

    assert_eq!(copy.status, ArticleStatus::Draft);
    assert_eq!(copy.published_at, None);
    assert_eq!(copy.scheduled_at, None);
    assert_eq!(copy.author_id, 7);

    // The source keeps its published state.
    let source_after = fixture.repository.article(source.id).unwrap();
    assert_eq!(source_after.status, ArticleStatus::Published);
}

#[tokio::test]
async fn duplicating_a_duplicate_stacks_the_suffix() {
    let fixture = Fixture::new();
    let service = fixture.duplication();
    let source = fixture
        .repository
        .seed_article("original", "Original", ArticleStatus::Draft);

    let first = service.duplicate(source.id, &editor()).await.unwrap();
    let second = service.duplicate(first.id, &editor()).await.unwrap();

    assert_eq!(second.title, "Original (Copy) (Copy)");
    assert_ne!(first.slug, second.slug);
}

#[tokio::test]
async fn missing_source_creates_nothing() {
    let fixture = Fixture::new();
    let service = fixture.duplication();

    let err = service.duplicate(4242, &editor()).await.unwrap_err();

    assert!(matches!(err, CmsError::NotFound("Article")));
    assert_eq!(fixture.repository.article_count(), 0);
}

#[tokio::test]
async fn source_without_associations_duplicates_cleanly() {
    let fixture = Fixture::new();
    let service = fixture.duplication();
    let source = fixture
        .repository
        .seed_article("standalone", "Standalone", ArticleStatus::Archived);

    let copy = service.duplicate(source.id, &editor()).await.unwrap();

    assert_eq!(fixture.repository.association_counts(copy.id), (0, 0));
    assert_eq!(copy.status, ArticleStatus::Draft);
}

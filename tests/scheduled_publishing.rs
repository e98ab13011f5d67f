//! The scheduled-publish sweep: due articles are promoted, future ones
//! left alone.

mod common;

use chrono::{Duration, Utc};
use common::Fixture;
use pressroom_core::state_machine::{ArticleStatus, PublishAction};

#[tokio::test]
async fn sweep_publishes_only_due_articles() {
    let fixture = Fixture::new();
    let engine = fixture.transition_engine();
    let publisher = fixture.scheduled_publisher();
    let now = Utc::now();

    let due = fixture
        .repository
        .seed_article("due", "Due", ArticleStatus::Draft);
    let future = fixture
        .repository
        .seed_article("future", "Future", ArticleStatus::Draft);
    let draft = fixture
        .repository
        .seed_article("untouched", "Untouched", ArticleStatus::Draft);

    engine
        .transition(due.id, PublishAction::Schedule, Some(now - Duration::minutes(5)))
        .await
        .unwrap();
    engine
        .transition(future.id, PublishAction::Schedule, Some(now + Duration::hours(2)))
        .await
        .unwrap();

    let published = publisher.publish_due(now).await.unwrap();

    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id, due.id);
    assert_eq!(published[0].status, ArticleStatus::Published);
    assert!(published[0].published_at.is_some());
    assert_eq!(published[0].scheduled_at, None);

    assert_eq!(
        fixture.repository.article(future.id).unwrap().status,
        ArticleStatus::Scheduled
    );
    assert_eq!(
        fixture.repository.article(draft.id).unwrap().status,
        ArticleStatus::Draft
    );
}

#[tokio::test]
async fn sweep_with_nothing_due_is_a_no_op() {
    let fixture = Fixture::new();
    let publisher = fixture.scheduled_publisher();
    fixture
        .repository
        .seed_article("quiet", "Quiet", ArticleStatus::Published);

    let published = publisher.publish_due(Utc::now()).await.unwrap();

    assert!(published.is_empty());
}

#[tokio::test]
async fn sweep_promotes_due_articles_in_schedule_order() {
    let fixture = Fixture::new();
    let engine = fixture.transition_engine();
    let publisher = fixture.scheduled_publisher();
    let now = Utc::now();

    let later = fixture
        .repository
        .seed_article("second", "Second", ArticleStatus::Draft);
    let earlier = fixture
        .repository
        .seed_article("first", "First", ArticleStatus::Draft);

    engine
        .transition(later.id, PublishAction::Schedule, Some(now - Duration::minutes(1)))
        .await
        .unwrap();
    engine
        .transition(earlier.id, PublishAction::Schedule, Some(now - Duration::minutes(10)))
        .await
        .unwrap();

    let published = publisher.publish_due(now).await.unwrap();

    let ids: Vec<i64> = published.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);
}

#[tokio::test]
async fn end_to_end_schedule_then_sweep_then_archive() {
    let fixture = Fixture::new();
    let engine = fixture.transition_engine();
    let publisher = fixture.scheduled_publisher();
    let article = fixture
        .repository
        .seed_article("lifecycle", "Lifecycle", ArticleStatus::Draft);

    engine
        .transition(
            article.id,
            PublishAction::Schedule,
            Some(Utc::now() - Duration::seconds(1)),
        )
        .await
        .unwrap();
    publisher.publish_due(Utc::now()).await.unwrap();

    let live = fixture.repository.article(article.id).unwrap();
    assert_eq!(live.status, ArticleStatus::Published);
    let published_at = live.published_at;
    assert!(published_at.is_some());

    engine
        .transition(article.id, PublishAction::Archive, None)
        .await
        .unwrap();

    let archived = fixture.repository.article(article.id).unwrap();
    assert_eq!(archived.status, ArticleStatus::Archived);
    assert_eq!(archived.published_at, published_at);
}

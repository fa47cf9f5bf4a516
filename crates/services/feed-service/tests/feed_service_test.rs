//! Feed service tests over an in-memory collection.

use std::sync::Arc;

use uuid::Uuid;

use common::AppError;
use docstore::{DocumentCollection, Filter, MemoryCollection};
use domain::{parse_id, Feed};
use feed_service_lib::config::FeedServiceConfig;
use feed_service_lib::{build, in_memory};

#[tokio::test]
async fn test_distinct_names_create() {
    let service = in_memory(&FeedServiceConfig::default());

    let daily = service.create_feed("Daily".to_string()).await.unwrap();
    let weekly = service.create_feed("Weekly".to_string()).await.unwrap();

    assert_ne!(daily.id, weekly.id);
    assert!(daily.posts.is_empty());
    assert_eq!(service.list_feeds().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_repeated_name_conflicts() {
    let service = in_memory(&FeedServiceConfig::default());

    service.create_feed("Daily".to_string()).await.unwrap();
    let err = service.create_feed("Daily".to_string()).await.unwrap_err();

    assert!(matches!(err, AppError::NameConflict(_)));
    assert_eq!(service.list_feeds().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_post_twice_keeps_one_entry() {
    let service = in_memory(&FeedServiceConfig::default());
    let feed = service.create_feed("Daily".to_string()).await.unwrap();
    let post = Uuid::new_v4();

    service.add_post_to_feed(feed.id, post).await.unwrap();
    let err = service.add_post_to_feed(feed.id, post).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateEntry { .. }));

    let stored = service.get_feed_posts(feed.id).await.unwrap();
    assert_eq!(stored.posts, vec![post]);
}

#[tokio::test]
async fn test_duplicate_detected_across_spellings() {
    let service = in_memory(&FeedServiceConfig::default());
    let feed = service.create_feed("Daily".to_string()).await.unwrap();

    let lower = parse_id("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    let upper = parse_id("67E5504410B1426F9247BB680E5FE0C8").unwrap();

    service.add_post_to_feed(feed.id, lower).await.unwrap();
    let err = service.add_post_to_feed(feed.id, upper).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateEntry { .. }));
}

#[tokio::test]
async fn test_remove_post_lifecycle() {
    let service = in_memory(&FeedServiceConfig::default());
    let feed = service.create_feed("Daily".to_string()).await.unwrap();
    let post = Uuid::new_v4();

    let err = service.remove_post_from_feed(feed.id, post).await.unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound { .. }));

    service.add_post_to_feed(feed.id, post).await.unwrap();
    let refreshed = service.remove_post_from_feed(feed.id, post).await.unwrap();
    assert!(!refreshed.contains_post(&post));
}

#[tokio::test]
async fn test_unknown_feed_not_found() {
    let service = in_memory(&FeedServiceConfig::default());
    let missing = Uuid::new_v4();

    let err = service.get_feed_posts(missing).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { id, .. } if id == missing));

    let err = service.add_post_to_feed(missing, Uuid::new_v4()).await.unwrap_err();
    assert!(err.is_not_found());

    let err = service
        .remove_post_from_feed(missing, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_daily_scenario() {
    let service = in_memory(&FeedServiceConfig::default());
    let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());

    let daily = service.create_feed("Daily".to_string()).await.unwrap();
    service.add_post_to_feed(daily.id, p1).await.unwrap();
    service.add_post_to_feed(daily.id, p2).await.unwrap();
    service.remove_post_from_feed(daily.id, p1).await.unwrap();

    let feed = service.get_feed_posts(daily.id).await.unwrap();
    assert_eq!(feed.posts, vec![p2]);
}

#[tokio::test]
async fn test_posts_keep_insertion_order() {
    let service = in_memory(&FeedServiceConfig::default());
    let feed = service.create_feed("Daily".to_string()).await.unwrap();
    let posts: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();

    for post in &posts {
        service.add_post_to_feed(feed.id, *post).await.unwrap();
    }

    assert_eq!(service.get_feed_posts(feed.id).await.unwrap().posts, posts);
}

#[tokio::test]
async fn test_one_document_per_feed() {
    let feeds: Arc<MemoryCollection<Feed>> = Arc::new(MemoryCollection::new("feeds"));
    let service = build(feeds.clone());

    let feed = service.create_feed("Daily".to_string()).await.unwrap();
    service.add_post_to_feed(feed.id, Uuid::new_v4()).await.unwrap();

    assert_eq!(feeds.count(Filter::all()).await.unwrap(), 1);
    let stored = feeds.read_one(Filter::by_id(feed.id)).await.unwrap().unwrap();
    assert_eq!(stored.posts.len(), 1);
    assert!(stored.updated_at >= stored.created_at);
}

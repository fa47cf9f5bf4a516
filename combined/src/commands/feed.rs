//! Feed command - drive the feed service.

use serde_json::json;

use common::AppResult;
use domain::{MSG_FEED_CREATED, MSG_POST_ADDED, MSG_POST_REMOVED};
use feed_service_lib::FeedService;

use super::print_json;
use crate::cli::FeedAction;

/// Execute a feed action
pub async fn execute(action: FeedAction, service: &dyn FeedService) -> AppResult<()> {
    match action {
        FeedAction::Create { name } => {
            let feed = service.create_feed(name).await?;
            print_json(json!({ "msg": MSG_FEED_CREATED, "feed": feed }))
        }
        FeedAction::AddPost { feed, post } => {
            service.add_post_to_feed(feed, post).await?;
            print_json(json!({ "msg": MSG_POST_ADDED }))
        }
        FeedAction::RemovePost { feed, post } => {
            let feed = service.remove_post_from_feed(feed, post).await?;
            print_json(json!({ "msg": MSG_POST_REMOVED, "feed": feed }))
        }
        FeedAction::Show { feed } => {
            let feed = service.get_feed_posts(feed).await?;
            print_json(json!(feed))
        }
        FeedAction::List => {
            let feeds = service.list_feeds().await?;
            print_json(json!(feeds))
        }
    }
}

//! Reaction command - drive the reaction service.

use serde_json::json;

use common::AppResult;
use domain::{ReactionKind, MSG_REACTION_ADDED, MSG_REACTION_REMOVED};
use reaction_service_lib::ReactionService;

use super::print_json;
use crate::cli::ReactionAction;

/// Execute a reaction action
pub async fn execute(action: ReactionAction, service: &dyn ReactionService) -> AppResult<()> {
    match action {
        ReactionAction::Add {
            user,
            item,
            reaction,
        } => {
            let reaction = service.add_reaction(user, item, reaction).await?;
            print_json(json!({ "msg": MSG_REACTION_ADDED, "reaction": reaction }))
        }
        ReactionAction::Remove { user, item } => {
            service.remove_reaction(user, item).await?;
            print_json(json!({ "msg": MSG_REACTION_REMOVED }))
        }
        ReactionAction::Count { item } => {
            let count = service.get_reaction_count(item).await?;
            print_json(json!({ "item": item, "count": count }))
        }
        ReactionAction::Kinds => print_json(json!(ReactionKind::labels())),
    }
}

//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Feed and reaction concepts over a document store
#[derive(Parser, Debug)]
#[command(name = "concepts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database connection URL
    #[arg(long, global = true, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },

    /// Manage feeds
    Feed {
        #[command(subcommand)]
        action: FeedAction,
    },

    /// Manage reactions
    Reaction {
        #[command(subcommand)]
        action: ReactionAction,
    },
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Feed actions
#[derive(Subcommand, Debug)]
pub enum FeedAction {
    /// Create an empty feed
    Create { name: String },

    /// Append a post to a feed
    AddPost {
        #[arg(value_parser = parse_id_arg)]
        feed: Uuid,
        #[arg(value_parser = parse_id_arg)]
        post: Uuid,
    },

    /// Remove a post from a feed
    RemovePost {
        #[arg(value_parser = parse_id_arg)]
        feed: Uuid,
        #[arg(value_parser = parse_id_arg)]
        post: Uuid,
    },

    /// Show a feed and its posts
    Show {
        #[arg(value_parser = parse_id_arg)]
        feed: Uuid,
    },

    /// List all feeds
    List,
}

/// Reaction actions
#[derive(Subcommand, Debug)]
pub enum ReactionAction {
    /// Set a user's reaction on an item
    Add {
        #[arg(value_parser = parse_id_arg)]
        user: Uuid,
        #[arg(value_parser = parse_id_arg)]
        item: Uuid,
        reaction: String,
    },

    /// Remove a user's reaction on an item
    Remove {
        #[arg(value_parser = parse_id_arg)]
        user: Uuid,
        #[arg(value_parser = parse_id_arg)]
        item: Uuid,
    },

    /// Count reactions on an item
    Count {
        #[arg(value_parser = parse_id_arg)]
        item: Uuid,
    },

    /// List the reaction vocabulary
    Kinds,
}

/// Accept any equivalent identifier spelling
fn parse_id_arg(raw: &str) -> Result<Uuid, String> {
    domain::parse_id(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ids_accept_any_spelling() {
        let cli = Cli::try_parse_from([
            "concepts",
            "feed",
            "add-post",
            "67E5504410B1426F9247BB680E5FE0C8",
            "{67e55044-10b1-426f-9247-bb680e5fe0c9}",
        ])
        .unwrap();

        match cli.command {
            Commands::Feed {
                action: FeedAction::AddPost { feed, post },
            } => {
                assert_eq!(feed.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
                assert_eq!(post.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c9");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_id_rejected() {
        let result = Cli::try_parse_from(["concepts", "feed", "show", "nope"]);
        assert!(result.is_err());
    }
}

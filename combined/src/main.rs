//! Command-line front-end for the feed and reaction concepts.

mod cli;
mod commands;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppResult, DatabaseConfig, ServiceConfig};
use docstore::Database;
use feed_service_lib::config::FeedServiceConfig;
use reaction_service_lib::config::ReactionServiceConfig;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let service_config = ServiceConfig::from_env("concepts");

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| service_config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        error!(code = err.code(), "{}", err);
        eprintln!("error [{}]: {}", err.code(), err.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut db_config = DatabaseConfig::from_env();
    if let Some(url) = cli.database_url {
        db_config = db_config.with_url(url);
    }

    match cli.command {
        Commands::Migrate { action } => commands::migrate::execute(action, &db_config).await,
        Commands::Feed { action } => {
            let db = Database::connect(&db_config).await?;
            let service =
                feed_service_lib::with_database(db.get_connection(), &FeedServiceConfig::from_env());
            commands::feed::execute(action, service.as_ref()).await
        }
        Commands::Reaction { action } => {
            let db = Database::connect(&db_config).await?;
            let service = reaction_service_lib::with_database(
                db.get_connection(),
                &ReactionServiceConfig::from_env(),
            );
            commands::reaction::execute(action, service.as_ref()).await
        }
    }
}

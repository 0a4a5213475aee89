//! Grimoire CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use grimoire::cli::{commands, Cli, Commands};
use grimoire::{ConfigLoader, RagSystem};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err:#}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let system = match RagSystem::init(&config).await {
        Ok(system) => system,
        Err(err) => grimoire::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Ask { question } => commands::ask::execute(&system, &question, cli.json).await,
        Commands::Search {
            query,
            limit,
            category,
        } => commands::search::execute(&system, &query, limit, category.as_deref(), cli.json).await,
        Commands::Categories => commands::categories::execute(&system, cli.json).await,
        Commands::Category { name } => {
            commands::search::execute_category(&system, &name, cli.json).await
        }
        Commands::Load { file } => commands::load::execute(&system, &file, cli.json).await,
    };

    system.shutdown();

    if let Err(err) = result {
        grimoire::cli::handle_error(err, cli.json);
    }
}

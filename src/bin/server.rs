use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quiz_api::configuration::get_configuration;
use quiz_api::db::{establish_connection, run_migrations};
use quiz_api::server::app::run_server;
use quiz_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about = "Quiz API", long_about = None)]
struct Cli {
    /// Configuration file, `quiz-api.toml` is read if present otherwise
    #[clap(long)]
    config: Option<PathBuf>,
    /// Do not create missing tables on startup
    #[clap(long)]
    skip_schema: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = get_configuration(cli.config.as_deref())?;

    let pool = establish_connection(&settings.database)
        .await
        .context("Failed to connect to the database")?;

    if !cli.skip_schema {
        tracing::info!("Ensuring database schema...");
        run_migrations(&pool)
            .await
            .context("Failed to create database schema")?;
    }

    let served = run_server(pool.clone(), &settings.application).await;
    tracing::info!("Closing database pool");
    pool.close().await;
    served
}

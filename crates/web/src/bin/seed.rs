//! Loads the team roster into the database from a JSON file so the
//! roster lives in one versioned data file instead of scattered
//! scripts. Existing teams are left untouched; reruns are harmless.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use storage::Database;
use storage::repository::teams::TeamRepository;

#[derive(Parser, Debug)]
#[command(about = "Seed the team roster from a JSON array of names")]
struct Args {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Path to a JSON file containing an array of team names
    #[arg(long, default_value = "data/teams.json")]
    teams: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let contents = std::fs::read_to_string(&args.teams)
        .with_context(|| format!("Failed to read {}", args.teams.display()))?;
    let names: Vec<String> =
        serde_json::from_str(&contents).context("Roster file must be a JSON array of strings")?;
    tracing::info!(total = names.len(), "Loaded roster file");

    let db = Database::new(&args.database_url)
        .await
        .context("Failed to initialize database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    let inserted = TeamRepository::new(db.pool()).upsert_names(&names).await?;
    tracing::info!(inserted, skipped = names.len() as u64 - inserted, "Roster seeded");

    Ok(())
}

mod cli;

use crate::cli::Cli;
use anyhow::Result;
use clap::Parser;
use mongo_seed::{run, RunOutcome};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let default_level = if args.debug { "mongo_seed=debug" } else { "mongo_seed=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = match args.resolve() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "{}", e);
            std::process::exit(1);
        }
    };

    match run(&cfg).await {
        Ok(RunOutcome::Inserted(summary)) => {
            tracing::info!(inserted = summary.inserted_count(), "seed complete");
        }
        Ok(RunOutcome::Parsed { documents }) => {
            println!("✅ Dry run: {} documents would be inserted.", documents);
        }
        Err(e) => {
            tracing::error!(kind = ?e.kind(), error = ?e, "{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

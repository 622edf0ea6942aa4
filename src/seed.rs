// src/seed.rs
use crate::config::SeedConfig;
use crate::error::Result;
use crate::insert::{insert_dataset, InsertSummary};
use crate::loader::load_dataset;
use crate::mongo::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Inserted(InsertSummary),
    /// Dry run: documents parsed, nothing sent.
    Parsed { documents: usize },
}

/// connect → read → parse → insert → close.
///
/// The session is closed on every path once it has been opened, including
/// when loading or inserting fails.
pub async fn run(cfg: &SeedConfig) -> Result<RunOutcome> {
    if cfg.dry_run {
        let dataset = load_dataset(&cfg.input, cfg.extended_json)?;
        for (idx, doc) in dataset.iter().enumerate() {
            println!("Document {}: {}", idx, doc);
        }
        return Ok(RunOutcome::Parsed {
            documents: dataset.len(),
        });
    }

    let session = Session::connect(cfg).await?;
    println!("Connected successfully to server");

    let outcome = load_and_insert(&session, cfg).await;
    session.close().await;

    let summary = outcome?;
    println!("Inserted documents => {}", summary);
    Ok(RunOutcome::Inserted(summary))
}

async fn load_and_insert(session: &Session, cfg: &SeedConfig) -> Result<InsertSummary> {
    let collection = session.collection(&cfg.collection);
    let dataset = load_dataset(&cfg.input, cfg.extended_json)?;
    tracing::info!(
        documents = dataset.len(),
        db = %cfg.database,
        collection = %cfg.collection,
        "loaded dataset"
    );
    for doc in &dataset {
        tracing::debug!(%doc, "document");
    }
    insert_dataset(&collection, dataset, cfg.ordered).await
}

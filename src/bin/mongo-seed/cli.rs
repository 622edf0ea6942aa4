use clap::Parser;
use mongo_seed::config::SeedConfig;
use mongo_seed::Result;
use std::path::PathBuf;

/// CLI arguments for mongo-seed
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML file with defaults for any of the options below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// MongoDB connection string
    #[arg(long)]
    pub mongo_uri: Option<String>,

    #[arg(long)]
    pub db: Option<String>,

    #[arg(long)]
    pub collection: Option<String>,

    /// JSON file holding a top-level array of documents
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Decode MongoDB Extended JSON ($oid, $date, ...)
    #[arg(long)]
    pub extended_json: bool,

    /// Let the server attempt every document instead of stopping at the first failure
    #[arg(long)]
    pub unordered: bool,

    #[arg(long)]
    pub dry_run: bool,

    #[arg(long)]
    pub debug: bool,

    #[arg(long)]
    pub server_selection_timeout_ms: Option<u64>,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<SeedConfig> {
        let mut cfg = match &self.config {
            Some(path) => SeedConfig::from_yaml_file(path)?,
            None => SeedConfig::default(),
        };

        if let Some(uri) = &self.mongo_uri {
            cfg.uri = uri.clone();
        }
        if let Some(db) = &self.db {
            cfg.database = db.clone();
        }
        if let Some(collection) = &self.collection {
            cfg.collection = collection.clone();
        }
        if let Some(input) = &self.input {
            cfg.input = input.clone();
        }
        if self.extended_json {
            cfg.extended_json = true;
        }
        if self.unordered {
            cfg.ordered = false;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.server_selection_timeout_ms.is_some() {
            cfg.server_selection_timeout_ms = self.server_selection_timeout_ms;
        }

        Ok(cfg)
    }
}

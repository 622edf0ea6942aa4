// src/mongo.rs
use crate::config::SeedConfig;
use crate::error::{Result, SeedError};
use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;

/// A live connection to one database. Call [`Session::close`] when done.
pub struct Session {
    client: Client,
    db: Database,
}

impl Session {
    /// Connects and pings the server, so an unreachable store fails here
    /// rather than on the first write.
    pub async fn connect(cfg: &SeedConfig) -> Result<Self> {
        let mut client_options = ClientOptions::parse(&cfg.uri)
            .await
            .map_err(|source| SeedError::Connection { source })?;
        if let Some(ms) = cfg.server_selection_timeout_ms {
            client_options.server_selection_timeout = Some(Duration::from_millis(ms));
            client_options.connect_timeout = Some(Duration::from_millis(ms));
        }

        let client = Client::with_options(client_options)
            .map_err(|source| SeedError::Connection { source })?;
        let db = client.database(&cfg.database);

        if let Err(source) = db.run_command(doc! { "ping": 1 }).await {
            client.shutdown().immediate(true).await;
            return Err(SeedError::Connection { source });
        }

        tracing::debug!(uri = %cfg.uri, db = %cfg.database, "ping ok");
        Ok(Self { client, db })
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }

    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::debug!("connection closed");
    }
}

// src/insert.rs
use crate::error::{Result, SeedError};
use crate::loader::Dataset;
use bson::{Bson, Document};
use mongodb::Collection;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertSummary {
    /// Store-assigned (or supplied) `_id`s in input order.
    pub inserted_ids: Vec<Bson>,
}

impl InsertSummary {
    pub fn inserted_count(&self) -> usize {
        self.inserted_ids.len()
    }
}

impl fmt::Display for InsertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ acknowledged: true, insertedCount: {}, insertedIds: {{", self.inserted_count())?;
        for (idx, id) in self.inserted_ids.iter().enumerate() {
            let sep = if idx == 0 { " " } else { ", " };
            write!(f, "{}'{}': {}", sep, idx, id)?;
        }
        if !self.inserted_ids.is_empty() {
            write!(f, " ")?;
        }
        write!(f, "}} }}")
    }
}

/// Submits the whole dataset as one `insertMany`.
///
/// With `ordered` the server stops at the first failing document; otherwise
/// it attempts every document. Either way a failure is a single
/// [`SeedError::Insert`] and nothing is rolled back.
pub async fn insert_dataset(
    collection: &Collection<Document>,
    dataset: Dataset,
    ordered: bool,
) -> Result<InsertSummary> {
    if dataset.is_empty() {
        tracing::info!(collection = %collection.name(), "dataset is empty, nothing to insert");
        return Ok(InsertSummary::default());
    }

    let total = dataset.len();
    let result = collection
        .insert_many(dataset)
        .ordered(ordered)
        .await
        .map_err(|source| SeedError::Insert { source })?;

    let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
    ids.sort_by_key(|(idx, _)| *idx);
    tracing::debug!(total, inserted = ids.len(), "insert_many acknowledged");

    Ok(InsertSummary {
        inserted_ids: ids.into_iter().map(|(_, id)| id).collect(),
    })
}

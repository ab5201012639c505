//! In-memory [`DocumentStore`] used by the integration tests.
//!
//! Matches the contract of the MongoDB store closely enough for the HTTP
//! surface to be exercised without a live database: ids are real ObjectIds,
//! filters are top-level equality matches, insertion order is preserved.

use crate::storage::store::DocumentStore;
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, mut document: Document) -> anyhow::Result<String> {
        let id = ObjectId::new();
        document.insert("_id", Bson::ObjectId(id));
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store poisoned"))?;
        collections.entry(collection.to_string()).or_default().push(document);
        Ok(id.to_hex())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> anyhow::Result<Vec<Document>> {
        let collections = self
            .collections
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store poisoned"))?;
        let mut results: Vec<Document> = collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| matches(d, &filter)).cloned().collect())
            .unwrap_or_default();
        if let Some(limit) = limit {
            results.truncate(limit.max(0) as usize);
        }
        Ok(results)
    }

    async fn list_collection_names(&self) -> anyhow::Result<Vec<String>> {
        let collections = self
            .collections
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store poisoned"))?;
        Ok(collections.keys().cloned().collect())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

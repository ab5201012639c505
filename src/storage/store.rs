//! The document store seam.
//!
//! The persistence gateway talks to the database exclusively through this
//! trait, so tests (and DB-less deployments) can substitute an in-memory
//! implementation for the real MongoDB driver.

use async_trait::async_trait;
use bson::Document;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a single document into the named collection and returns the
    /// store-assigned identifier rendered as a string.
    async fn insert_one(&self, collection: &str, document: Document) -> anyhow::Result<String>;

    /// Returns documents matching `filter` (empty filter = all documents),
    /// truncated to `limit` when given.
    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> anyhow::Result<Vec<Document>>;

    /// Lists the collection names present in the database.
    async fn list_collection_names(&self) -> anyhow::Result<Vec<String>>;

    /// Cheap connectivity probe.
    async fn ping(&self) -> anyhow::Result<()>;
}

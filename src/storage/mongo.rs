//! MongoDB-backed [`DocumentStore`].
//!
//! Connection pooling and concurrency safety are the driver's job; this type
//! is a thin translation layer that also normalizes inserted ids to strings.

use crate::storage::store::DocumentStore;
use anyhow::Context;
use async_trait::async_trait;
use bson::{doc, Bson, Document};
use futures::stream::TryStreamExt;
use mongodb::{Client, Database};

pub struct MongoStore {
    client: Client,
    database_name: String,
}

impl MongoStore {
    /// Connects using a MongoDB connection string.
    ///
    /// `mongodb+srv` URIs resolve DNS during parsing, so a bad URI or a
    /// missing SRV record surfaces here rather than on first operation.
    pub async fn connect(url: &str, database_name: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(url)
            .await
            .context("failed to parse MongoDB connection string")?;
        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    fn database(&self) -> Database {
        self.client.database(&self.database_name)
    }
}

/// Renders a store-assigned id as a plain string (24-hex for ObjectIds).
pub(crate) fn bson_id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> anyhow::Result<String> {
        let coll = self.database().collection::<Document>(collection);
        let result = coll
            .insert_one(document)
            .await
            .with_context(|| format!("insert into '{}' failed", collection))?;
        Ok(bson_id_to_string(result.inserted_id))
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> anyhow::Result<Vec<Document>> {
        let coll = self.database().collection::<Document>(collection);
        let mut find = coll.find(filter);
        if let Some(limit) = limit {
            find = find.limit(limit);
        }
        let cursor = find
            .await
            .with_context(|| format!("query on '{}' failed", collection))?;
        cursor
            .try_collect()
            .await
            .with_context(|| format!("cursor drain on '{}' failed", collection))
    }

    async fn list_collection_names(&self) -> anyhow::Result<Vec<String>> {
        self.database()
            .list_collection_names()
            .await
            .context("listing collections failed")
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.database()
            .run_command(doc! { "ping": 1 })
            .await
            .context("ping failed")?;
        Ok(())
    }
}

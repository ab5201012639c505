//! The document persistence gateway.
//!
//! This module is the intermediary between the HTTP surface and the document
//! database. It is responsible for:
//! 1.  Owning the store handle behind an explicit readiness state.
//! 2.  Stamping `created_at`/`updated_at` on every insert.
//! 3.  Primitive reads with an optional limit.
//!
//! Initialization is deliberately lazy-failing: a missing or broken database
//! configuration leaves the service in the `Unavailable` state instead of
//! aborting startup, so the server can still answer its non-database
//! endpoints. The captured init error is replayed in later failure messages.

use crate::infra::config;
use crate::storage::{DocumentStore, MongoStore};
use anyhow::anyhow;
use bson::{Bson, Document};
use std::sync::Arc;

/// Explicit readiness of the gateway, decided once at construction.
enum Connection {
    Ready(Arc<dyn DocumentStore>),
    Unavailable { reason: Option<String> },
}

/// Snapshot of the connection state for the diagnostics endpoint.
pub struct ConnectionStatus {
    /// The gateway was initialized with a store handle.
    pub ready: bool,
    /// The store answered a ping just now.
    pub connected: bool,
    pub database_name: Option<String>,
    pub init_error: Option<String>,
}

pub struct DocumentService {
    connection: Connection,
    database_name: Option<String>,
}

impl DocumentService {
    /// Builds the gateway from `DATABASE_URL`/`DATABASE_NAME`.
    ///
    /// Never fails: absent variables or a connection error yield an
    /// `Unavailable` gateway whose operations report the retained cause.
    pub async fn from_env() -> Self {
        let (Some(url), Some(name)) = (config::database_url(), config::database_name()) else {
            return Self {
                connection: Connection::Unavailable { reason: None },
                database_name: None,
            };
        };

        match MongoStore::connect(&url, &name).await {
            Ok(store) => Self {
                connection: Connection::Ready(Arc::new(store)),
                database_name: Some(name),
            },
            Err(e) => Self {
                connection: Connection::Unavailable {
                    reason: Some(format!("{:#}", e)),
                },
                database_name: Some(name),
            },
        }
    }

    /// Builds a ready gateway over an injected store (tests, embedded use).
    pub fn with_store(store: Arc<dyn DocumentStore>, database_name: &str) -> Self {
        Self {
            connection: Connection::Ready(store),
            database_name: Some(database_name.to_string()),
        }
    }

    /// Builds a gateway that was never initialized.
    pub fn unavailable(reason: Option<String>) -> Self {
        Self {
            connection: Connection::Unavailable { reason },
            database_name: None,
        }
    }

    fn store(&self) -> anyhow::Result<&Arc<dyn DocumentStore>> {
        match &self.connection {
            Connection::Ready(store) => Ok(store),
            Connection::Unavailable { reason } => {
                let base =
                    "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables.";
                Err(match reason {
                    Some(init_error) => anyhow!("{} Init error: {}", base, init_error),
                    None => anyhow!("{}", base),
                })
            }
        }
    }

    /// Inserts a single document with timestamps.
    ///
    /// `created_at` and `updated_at` receive the same UTC instant; there is
    /// no update path, so they never diverge afterwards.
    pub async fn create_document(
        &self,
        collection_name: &str,
        mut document: Document,
    ) -> anyhow::Result<String> {
        let store = self.store()?;
        let now = bson::DateTime::now();
        document.insert("created_at", Bson::DateTime(now));
        document.insert("updated_at", Bson::DateTime(now));
        store.insert_one(collection_name, document).await
    }

    /// Gets documents from a collection.
    ///
    /// A limit of 0 means "no limit" (long-standing quirk of this API,
    /// preserved on purpose). Negative limits are normalized to "no limit"
    /// here, before reaching a store; the MongoDB driver would otherwise read
    /// a negative limit as `|n|` documents.
    pub async fn get_documents(
        &self,
        collection_name: &str,
        filter: Option<Document>,
        limit: Option<i64>,
    ) -> anyhow::Result<Vec<Document>> {
        let store = self.store()?;
        let effective_limit = limit.filter(|l| *l > 0);
        store
            .find_many(collection_name, filter.unwrap_or_default(), effective_limit)
            .await
    }

    /// Reports the current connection state for diagnostics.
    pub async fn status(&self) -> ConnectionStatus {
        match &self.connection {
            Connection::Ready(store) => ConnectionStatus {
                ready: true,
                connected: store.ping().await.is_ok(),
                database_name: self.database_name.clone(),
                init_error: None,
            },
            Connection::Unavailable { reason } => ConnectionStatus {
                ready: false,
                connected: false,
                database_name: self.database_name.clone(),
                init_error: reason.clone(),
            },
        }
    }

    /// Lists up to `limit` collection names, for diagnostics only.
    pub async fn list_collections(&self, limit: usize) -> anyhow::Result<Vec<String>> {
        let store = self.store()?;
        let mut names = store.list_collection_names().await?;
        names.truncate(limit);
        Ok(names)
    }
}

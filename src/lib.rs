pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::document_service::{ConnectionStatus, DocumentService};
pub use domain::schema::{CollectionSchema, FieldKind, FieldSpec, FieldViolation, SchemaRegistry};
pub use storage::{DocumentStore, MemoryStore, MongoStore};

//! SchemaRegistry for mapping collection names to CollectionSchema implementations.

use super::{CollectionSchema, DishSchema, ProductSchema, ReservationSchema, UserSchema};
use std::collections::HashMap;
use std::sync::Arc;

/// A registry that maps collection names to their schema implementations.
pub struct SchemaRegistry {
    schemas: HashMap<String, Arc<dyn CollectionSchema>>,
}

impl SchemaRegistry {
    /// Creates a new empty SchemaRegistry.
    pub fn new() -> Self {
        Self { schemas: HashMap::new() }
    }

    /// Creates a registry pre-populated with every known collection schema.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(UserSchema::new());
        registry.register(ProductSchema::new());
        registry.register(DishSchema::new());
        registry.register(ReservationSchema::new());
        registry
    }

    /// Registers a schema under its own collection name.
    pub fn register<S: CollectionSchema + 'static>(&mut self, schema: S) {
        self.schemas.insert(schema.collection_name().to_string(), Arc::new(schema));
    }

    /// Retrieves a schema by collection name.
    /// Returns None if the collection is not registered.
    pub fn get(&self, collection_name: &str) -> Option<Arc<dyn CollectionSchema>> {
        self.schemas.get(collection_name).cloned()
    }

    /// Returns all registered collection names.
    pub fn list_collections(&self) -> Vec<String> {
        self.schemas.keys().cloned().collect()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

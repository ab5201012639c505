//! Schema implementations for the restaurant collections.

use super::{CollectionSchema, FieldKind, FieldSpec};
use serde_json::json;

/// Users collection schema. Collection name: `user`.
///
/// Declared but not exposed over HTTP; kept for the external admin tooling
/// that reads the registry.
pub struct UserSchema {
    fields: Vec<FieldSpec>,
}

impl UserSchema {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FieldSpec::required("name", FieldKind::Text, "Full name"),
                FieldSpec::required("email", FieldKind::Text, "Email address"),
                FieldSpec::required("address", FieldKind::Text, "Address"),
                FieldSpec::optional("age", FieldKind::Int, "Age in years").with_range(0.0, 120.0),
                FieldSpec::optional("is_active", FieldKind::Bool, "Whether user is active")
                    .with_default(json!(true)),
            ],
        }
    }
}

impl Default for UserSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionSchema for UserSchema {
    fn collection_name(&self) -> &str {
        "user"
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// Products collection schema. Collection name: `product`.
pub struct ProductSchema {
    fields: Vec<FieldSpec>,
}

impl ProductSchema {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FieldSpec::required("title", FieldKind::Text, "Product title"),
                FieldSpec::optional("description", FieldKind::Text, "Product description"),
                FieldSpec::required("price", FieldKind::Float, "Price in dollars").with_min(0.0),
                FieldSpec::required("category", FieldKind::Text, "Product category"),
                FieldSpec::optional("in_stock", FieldKind::Bool, "Whether product is in stock")
                    .with_default(json!(true)),
            ],
        }
    }
}

impl Default for ProductSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionSchema for ProductSchema {
    fn collection_name(&self) -> &str {
        "product"
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// Menu dishes collection schema. Collection name: `dish`.
pub struct DishSchema {
    fields: Vec<FieldSpec>,
}

impl DishSchema {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FieldSpec::required("name", FieldKind::Text, "Dish name"),
                FieldSpec::optional("description", FieldKind::Text, "Short description of the dish"),
                FieldSpec::required("price", FieldKind::Float, "Price in local currency").with_min(0.0),
                FieldSpec::required(
                    "category",
                    FieldKind::Text,
                    "Category like Curry, Tandoor, Breads, Sweets, Beverages",
                ),
                FieldSpec::optional("spicy_level", FieldKind::Int, "Spice level from 0-5")
                    .with_range(0.0, 5.0),
                FieldSpec::optional("vegetarian", FieldKind::Bool, "Is this dish vegetarian")
                    .with_default(json!(false)),
                FieldSpec::optional("image", FieldKind::Text, "Public image URL"),
            ],
        }
    }
}

impl Default for DishSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionSchema for DishSchema {
    fn collection_name(&self) -> &str {
        "dish"
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// Reservations collection schema. Collection name: `reservation`.
pub struct ReservationSchema {
    fields: Vec<FieldSpec>,
}

impl ReservationSchema {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FieldSpec::required("name", FieldKind::Text, "Guest name"),
                FieldSpec::required("phone", FieldKind::Text, "Contact phone number"),
                FieldSpec::required("party_size", FieldKind::Int, "Number of guests")
                    .with_range(1.0, 20.0),
                FieldSpec::required("date", FieldKind::Date, "Reservation date"),
                FieldSpec::required("time", FieldKind::Text, "Reservation time, e.g., 19:30"),
                FieldSpec::optional("special_requests", FieldKind::Text, "Any special notes"),
            ],
        }
    }
}

impl Default for ReservationSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionSchema for ReservationSchema {
    fn collection_name(&self) -> &str {
        "reservation"
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

//! Process-wide cache of declared schemas.
//!
//! A schema is built once, on first registration, and lives for the
//! process. Registering a record type name again returns the cached
//! schema unchanged; nothing is ever removed or replaced.

use super::Schema;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

static REGISTRY: LazyLock<RwLock<HashMap<String, Arc<Schema>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Looks up the cached schema for a record type name.
pub fn get(name: &str) -> Option<Arc<Schema>> {
    let registry = REGISTRY.read().expect("schema registry lock poisoned");
    registry.get(name).cloned()
}

/// Caches a schema under its record type name, unless one is already
/// cached. Returns the schema that ends up registered.
pub(crate) fn insert(schema: Schema) -> Arc<Schema> {
    let mut registry = REGISTRY.write().expect("schema registry lock poisoned");
    registry
        .entry(schema.name.clone())
        .or_insert_with(|| Arc::new(schema))
        .clone()
}

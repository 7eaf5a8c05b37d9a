mod builder;
pub use builder::SchemaBuilder;

mod field;
pub use field::{Field, FieldTy};

pub mod registry;

use crate::{Error, Result};

/// Metadata for one record type: the table name, the declared fields in
/// order, and which field (if any) is the primary key.
///
/// A schema is built once, at declaration time, and shared read-only by
/// every record of the type.
#[derive(Debug)]
pub struct Schema {
    /// Record type name, e.g. `User`
    pub name: String,

    /// Name of the backing table
    pub table: String,

    /// Declared fields, in declaration order. Column order in generated
    /// SQL follows this order.
    pub fields: Vec<Field>,

    /// Index into `fields` of the primary-key field
    pub primary_key: Option<usize>,
}

impl Schema {
    /// Starts declaring a record type with the given name.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Looks up a field by name, failing with a usage error when the
    /// schema declares no such field.
    pub fn resolve_field(&self, name: &str) -> Result<&Field> {
        self.field(name)
            .ok_or_else(|| Error::unknown_field(&self.name, name))
    }

    /// The primary-key field, when one is declared.
    pub fn primary_key(&self) -> Option<&Field> {
        self.primary_key.map(|index| &self.fields[index])
    }

    /// The primary-key field, failing with a usage error naming the
    /// attempted operation when the schema has none.
    pub fn require_primary_key(&self, operation: &'static str) -> Result<&Field> {
        self.primary_key()
            .ok_or_else(|| Error::missing_primary_key(&self.name, operation))
    }

    /// Column names for every field, in declaration order.
    pub fn column_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|field| field.column_name().to_string())
            .collect()
    }
}

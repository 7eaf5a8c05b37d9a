use super::{registry, Field, Schema};
use crate::{Error, Result};

use std::sync::Arc;

/// Declares a record type: an ordered list of fields plus an optional
/// table-name override.
///
/// When no table name is supplied, one is derived from the record type
/// name by lower-casing it and appending `s`. The rule is fixed; `User`
/// maps to `users`, and [`table`](SchemaBuilder::table) is the only way
/// to get anything else.
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    table: Option<String>,
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Starts declaring a record type with the given name.
    pub fn new(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            table: None,
            fields: Vec::new(),
        }
    }

    /// Overrides the derived table name.
    pub fn table(mut self, table: impl Into<String>) -> SchemaBuilder {
        self.table = Some(table.into());
        self
    }

    /// Appends a field. Declaration order is preserved and drives column
    /// order in generated SQL.
    pub fn field(mut self, field: Field) -> SchemaBuilder {
        self.fields.push(field);
        self
    }

    /// Builds the schema, checking declaration-time invariants.
    ///
    /// Declaring two primary-key fields, or two fields with the same
    /// name, fails here, before any SQL is ever generated.
    pub fn build(self) -> Result<Schema> {
        let mut primary_key = None;

        for (index, field) in self.fields.iter().enumerate() {
            if self.fields[..index].iter().any(|prior| prior.name == field.name) {
                return Err(Error::duplicate_field(&self.name, &field.name));
            }

            if !field.primary_key {
                continue;
            }

            if let Some(first) = primary_key {
                let first: &Field = &self.fields[first];
                return Err(Error::duplicate_primary_key(
                    &self.name,
                    &first.name,
                    &field.name,
                ));
            }

            primary_key = Some(index);
        }

        let table = self
            .table
            .unwrap_or_else(|| derived_table_name(&self.name));

        Ok(Schema {
            name: self.name,
            table,
            fields: self.fields,
            primary_key,
        })
    }

    /// Builds the schema and caches it in the process-wide registry.
    ///
    /// The first registration of a record type name wins; registering the
    /// same name again returns the already-cached schema unchanged.
    pub fn register(self) -> Result<Arc<Schema>> {
        if let Some(schema) = registry::get(&self.name) {
            return Ok(schema);
        }

        Ok(registry::insert(self.build()?))
    }
}

/// The fixed table-naming rule: the record type name, lower-cased, with
/// `s` appended.
fn derived_table_name(name: &str) -> String {
    let mut table = name.to_lowercase();
    table.push('s');
    table
}

use crate::{Query, Result, Transaction};

use melba_core::driver::Row;
use melba_core::schema::{Field, Schema};
use melba_core::stmt::{Assignment, Delete, Insert, Predicate, Update, Value};

use chrono::Utc;
use indexmap::IndexMap;

use std::fmt;
use std::sync::Arc;

/// An instance of a declared record type.
///
/// A record owns one value per schema field, keyed by field name in
/// declaration order. Values are validated against their field before
/// they are stored, so a record that exists is a record whose values
/// fit its schema.
#[derive(Clone)]
pub struct Record {
    schema: Arc<Schema>,
    values: IndexMap<String, Value>,
}

impl Record {
    /// Creates a record, merging the supplied values over field defaults.
    ///
    /// Fields left unsupplied fall back to their default; `auto_now_add`
    /// date-time fields are stamped with the current time. A
    /// non-nullable field that ends up null fails validation here,
    /// before any SQL is built. Supplying a name the schema does not
    /// declare is a usage error.
    pub fn new<I, K, V>(schema: &Arc<Schema>, values: I) -> Result<Record>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut supplied = IndexMap::new();

        for (name, value) in values {
            let field = schema.resolve_field(name.as_ref())?;
            supplied.insert(field.name.clone(), value.into());
        }

        Record::build(schema, supplied)
    }

    /// Creates a record from defaults alone, as if no values were
    /// supplied.
    pub fn with_defaults(schema: &Arc<Schema>) -> Result<Record> {
        Record::build(schema, IndexMap::new())
    }

    /// Shared construction path for `new` and row hydration.
    fn build(schema: &Arc<Schema>, mut supplied: IndexMap<String, Value>) -> Result<Record> {
        let mut values = IndexMap::with_capacity(schema.fields.len());

        for field in &schema.fields {
            let value = match supplied.swap_remove(&field.name) {
                Some(value) => value,
                None => initial_value(field),
            };

            field.validate(&value)?;
            values.insert(field.name.clone(), field.coerce(value));
        }

        Ok(Record {
            schema: schema.clone(),
            values,
        })
    }

    /// Hydrates a fetched row into a record.
    ///
    /// Columns are matched by backing-column name. Declared fields
    /// missing from the row fall back to their defaults; columns the
    /// schema does not declare are ignored.
    pub(crate) fn from_row(schema: &Arc<Schema>, mut row: Row) -> Result<Record> {
        let mut supplied = IndexMap::new();

        for field in &schema.fields {
            if let Some(value) = row.take(field.column_name()) {
                supplied.insert(field.name.clone(), field.decode(value)?);
            }
        }

        Record::build(schema, supplied)
    }

    /// The schema this record was declared against.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Reads a field value. `None` when the schema has no such field.
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Ordered view of every field value.
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    /// Consumes the record, returning the ordered field-value map.
    pub fn into_values(self) -> IndexMap<String, Value> {
        self.values
    }

    /// Assigns a field value, validating before the write.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<()> {
        let field = self.schema.resolve_field(field)?;
        let value = value.into();

        field.validate(&value)?;

        let name = field.name.clone();
        let value = field.coerce(value);
        self.values.insert(name, value);
        Ok(())
    }

    /// Inserts or updates the record.
    ///
    /// A record whose primary key is still null inserts and learns its
    /// engine-assigned key; one with a key updates in place. Schemas
    /// without a primary key always insert, since there is no identity
    /// to update against.
    pub fn save(&mut self, tx: &mut Transaction<'_>) -> Result<()> {
        let has_identity = self
            .schema
            .primary_key()
            .is_some_and(|pk| !self.field_value(pk).is_null());

        if has_identity {
            self.update(tx)
        } else {
            self.insert(tx)
        }
    }

    fn insert(&mut self, tx: &mut Transaction<'_>) -> Result<()> {
        let mut columns = Vec::new();
        let mut values = Vec::new();
        let mut omitted_key = None;

        for field in &self.schema.fields {
            let value = self.field_value(field);

            // A null key is left out so the engine assigns one
            if field.primary_key && value.is_null() {
                omitted_key = Some(field.name.clone());
                continue;
            }

            columns.push(field.column_name().to_string());
            values.push(value.clone());
        }

        let statement = Insert {
            table: self.schema.table.clone(),
            columns,
            values,
        };

        let response = tx.exec(statement)?;

        if let (Some(name), Some(id)) = (omitted_key, response.last_insert_id) {
            self.values.insert(name, Value::Integer(id));
        }

        Ok(())
    }

    fn update(&mut self, tx: &mut Transaction<'_>) -> Result<()> {
        let pk = self.schema.require_primary_key("update")?;

        let assignments = self
            .schema
            .fields
            .iter()
            .filter(|field| !field.primary_key)
            .map(|field| Assignment {
                column: field.column_name().to_string(),
                value: self.field_value(field).clone(),
            })
            .collect();

        let statement = Update {
            table: self.schema.table.clone(),
            assignments,
            filter: Predicate::eq(pk.column_name(), self.field_value(pk).clone()).into(),
        };

        tx.exec(statement)?;
        Ok(())
    }

    /// Deletes the record's row and resets the in-memory key to null.
    ///
    /// The record is unsaved again afterwards: saving it inserts a new
    /// row. Other in-memory copies keep their stale key; invalidating
    /// them is the caller's responsibility.
    pub fn delete(&mut self, tx: &mut Transaction<'_>) -> Result<()> {
        let pk = self.schema.require_primary_key("delete")?;

        let statement = Delete {
            table: self.schema.table.clone(),
            filter: Predicate::eq(pk.column_name(), self.field_value(pk).clone()).into(),
        };

        let name = pk.name.clone();
        tx.exec(statement)?;

        self.values.insert(name, Value::Null);
        Ok(())
    }

    /// Fetches one record by primary key. `None` when no row matches.
    pub fn get(
        schema: &Arc<Schema>,
        tx: &mut Transaction<'_>,
        id: impl Into<Value>,
    ) -> Result<Option<Record>> {
        let pk = schema.require_primary_key("get")?;

        Query::new(schema)
            .filter_by([(pk.name.as_str(), id.into())])?
            .first(tx)
    }

    fn field_value(&self, field: &Field) -> &Value {
        &self.values[field.name.as_str()]
    }
}

/// The value a field takes when construction does not supply one.
fn initial_value(field: &Field) -> Value {
    if field.ty.auto_now_add() {
        return Value::DateTime(Utc::now().naive_utc());
    }

    field.default.clone().unwrap_or(Value::Null)
}

impl PartialEq for Record {
    fn eq(&self, other: &Record) -> bool {
        self.schema.name == other.schema.name && self.values == other.values
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.schema.primary_key() {
            Some(pk) if !self.field_value(pk).is_null() => {
                write!(f, "<{} {}={}>", self.schema.name, pk.name, self.field_value(pk))
            }
            _ => write!(f, "<{} (unsaved)>", self.schema.name),
        }
    }
}

//! Shared scenario-test helpers: throwaway schemas and database setup.

use melba::{Db, Field, Schema, SchemaBuilder, Sqlite};

use std::sync::Arc;

/// An `Item` type with one field of every kind the value model supports,
/// other than date-times.
pub fn item_schema() -> Arc<Schema> {
    Arc::new(
        Schema::builder("Item")
            .field(Field::integer("id").primary_key())
            .field(Field::text("name").max_length(100).not_null())
            .field(Field::text("description").max_length(500))
            .field(Field::boolean("active").default_value(true))
            .field(Field::float("price").default_value(0.0))
            .build()
            .unwrap(),
    )
}

/// An `Event` type exercising date-time fields.
pub fn event_schema() -> Arc<Schema> {
    Arc::new(
        SchemaBuilder::new("Event")
            .field(Field::integer("id").primary_key())
            .field(Field::text("label").not_null())
            .field(Field::date_time("created_at").auto_now_add())
            .field(Field::date_time("starts_at"))
            .build()
            .unwrap(),
    )
}

/// A `Tag` type with no primary key.
pub fn tag_schema() -> Arc<Schema> {
    Arc::new(
        SchemaBuilder::new("Tag")
            .field(Field::text("label").not_null())
            .build()
            .unwrap(),
    )
}

/// In-memory database with each schema's table created and committed.
pub fn setup(schemas: &[&Schema]) -> Db {
    let mut db = Db::connect(&Sqlite::in_memory()).unwrap();

    let mut tx = db.begin().unwrap();
    for schema in schemas {
        tx.create_table(schema).unwrap();
    }
    tx.commit().unwrap();

    db
}

use tests::*;

use melba::{registry, Field, Query, Record, SchemaBuilder, Value};

use pretty_assertions::assert_eq;

use std::sync::Arc;

#[test]
fn registered_schemas_are_shared() {
    let declared = SchemaBuilder::new("SharedGadget")
        .field(Field::integer("id").primary_key())
        .field(Field::text("name"))
        .register()
        .unwrap();

    let cached = registry::get("SharedGadget").unwrap();
    assert!(Arc::ptr_eq(&declared, &cached));

    // Redeclaring under the same name hands back the cached schema
    let redeclared = SchemaBuilder::new("SharedGadget")
        .field(Field::text("something_else"))
        .register()
        .unwrap();
    assert!(Arc::ptr_eq(&declared, &redeclared));
}

#[test]
fn column_overrides_round_trip() {
    let schema = Arc::new(
        SchemaBuilder::new("Person")
            .field(Field::integer("id").primary_key())
            .field(Field::text("name").column("full_name"))
            .build()
            .unwrap(),
    );

    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut person = Record::new(&schema, [("name", "Ada Lovelace")]).unwrap();
    person.save(&mut tx).unwrap();

    // Queries take the field name; the column name stays internal
    let fetched = Query::new(&schema)
        .filter_by([("name", "Ada Lovelace")])
        .unwrap()
        .first(&mut tx)
        .unwrap()
        .unwrap();

    assert_eq!(fetched.value("name"), Some(&Value::from("Ada Lovelace")));
    assert_eq!(fetched.value("full_name"), None);

    // Raw fragments address the backing column directly
    let records = Query::new(&schema)
        .filter("full_name = 'Ada Lovelace'")
        .all(&mut tx)
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn table_overrides_are_honored() {
    let schema = Arc::new(
        SchemaBuilder::new("Person")
            .table("people")
            .field(Field::integer("id").primary_key())
            .field(Field::text("name"))
            .build()
            .unwrap(),
    );
    assert_eq!(schema.table, "people");

    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut person = Record::new(&schema, [("name", "Grace")]).unwrap();
    person.save(&mut tx).unwrap();

    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 1);
}

#[test]
fn create_table_is_idempotent() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
    item.save(&mut tx).unwrap();

    // The table already exists; recreating it leaves the data alone
    tx.create_table(&schema).unwrap();

    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 1);
}

#[test]
fn dropped_tables_are_gone() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    tx.drop_table(&schema).unwrap();

    let err = Query::new(&schema).count(&mut tx).unwrap_err();
    assert!(err.is_storage());
}

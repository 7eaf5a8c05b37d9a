use tests::*;

use melba::{Query, Record, Value};

use pretty_assertions::assert_eq;

#[test]
fn insert_assigns_the_primary_key() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
    assert_eq!(item.value("id"), Some(&Value::Null));
    assert_eq!(format!("{item:?}"), "<Item (unsaved)>");

    item.save(&mut tx).unwrap();

    assert_eq!(item.value("id"), Some(&Value::Integer(1)));
    assert_eq!(format!("{item:?}"), "<Item id=1>");
}

#[test]
fn get_round_trips_every_field() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut item = Record::new(
        &schema,
        [
            ("name", Value::from("Laptop")),
            ("description", Value::from("A portable computer")),
            ("active", Value::from(false)),
            ("price", Value::from(999.99)),
        ],
    )
    .unwrap();
    item.save(&mut tx).unwrap();

    let fetched = Record::get(&schema, &mut tx, 1).unwrap().unwrap();

    assert_eq!(fetched, item);
    assert_eq!(fetched.value("name"), Some(&Value::from("Laptop")));
    assert_eq!(
        fetched.value("description"),
        Some(&Value::from("A portable computer"))
    );
    assert_eq!(fetched.value("active"), Some(&Value::Boolean(false)));
    assert_eq!(fetched.value("price"), Some(&Value::Float(999.99)));
}

#[test]
fn get_returns_none_for_a_missing_key() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    assert!(Record::get(&schema, &mut tx, 42).unwrap().is_none());
}

#[test]
fn an_explicit_key_updates_the_matching_row() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut original = Record::new(&schema, [("name", "Laptop")]).unwrap();
    original.save(&mut tx).unwrap();
    assert_eq!(original.value("id"), Some(&Value::Integer(1)));

    let mut replacement = Record::new(
        &schema,
        [
            ("id", Value::from(1)),
            ("name", Value::from("Desktop")),
            ("price", Value::from(1499.0)),
        ],
    )
    .unwrap();
    replacement.save(&mut tx).unwrap();

    assert_eq!(replacement.value("id"), Some(&Value::Integer(1)));

    let fetched = Record::get(&schema, &mut tx, 1).unwrap().unwrap();
    assert_eq!(fetched, replacement);
    assert_eq!(fetched.value("name"), Some(&Value::from("Desktop")));
    assert_eq!(fetched.value("price"), Some(&Value::Float(1499.0)));
    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 1);
}

#[test]
fn saving_with_an_unmatched_key_stores_nothing() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut item = Record::new(
        &schema,
        [("id", Value::from(42)), ("name", Value::from("Laptop"))],
    )
    .unwrap();
    item.save(&mut tx).unwrap();

    // A populated key routes the save to an update; no row matched
    assert_eq!(item.value("id"), Some(&Value::Integer(42)));
    assert!(Record::get(&schema, &mut tx, 42).unwrap().is_none());
    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 0);
}

#[test]
fn saving_again_updates_in_place() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
    item.save(&mut tx).unwrap();

    item.set("price", 1299.0).unwrap();
    item.set("active", false).unwrap();
    item.save(&mut tx).unwrap();

    let fetched = Record::get(&schema, &mut tx, 1).unwrap().unwrap();
    assert_eq!(fetched.value("price"), Some(&Value::Float(1299.0)));
    assert_eq!(fetched.value("active"), Some(&Value::Boolean(false)));

    // Still one row; the second save did not insert
    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 1);
}

#[test]
fn saving_without_changes_is_idempotent() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
    item.save(&mut tx).unwrap();
    item.save(&mut tx).unwrap();
    item.save(&mut tx).unwrap();

    let fetched = Record::get(&schema, &mut tx, 1).unwrap().unwrap();
    assert_eq!(fetched, item);
    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 1);
}

#[test]
fn delete_removes_the_row_and_resets_the_key() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
    item.save(&mut tx).unwrap();

    item.delete(&mut tx).unwrap();

    assert_eq!(item.value("id"), Some(&Value::Null));
    assert_eq!(format!("{item:?}"), "<Item (unsaved)>");
    assert!(Record::get(&schema, &mut tx, 1).unwrap().is_none());
    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 0);
}

#[test]
fn saving_after_delete_inserts_a_new_row() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut first = Record::new(&schema, [("name", "First")]).unwrap();
    first.save(&mut tx).unwrap();

    let mut second = Record::new(&schema, [("name", "Second")]).unwrap();
    second.save(&mut tx).unwrap();

    first.delete(&mut tx).unwrap();
    first.save(&mut tx).unwrap();

    assert_eq!(first.value("id"), Some(&Value::Integer(3)));
    assert!(Record::get(&schema, &mut tx, 1).unwrap().is_none());
    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 2);
}

#[test]
fn keyless_records_always_insert() {
    let schema = tag_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut tag = Record::new(&schema, [("label", "urgent")]).unwrap();
    tag.save(&mut tx).unwrap();
    tag.save(&mut tx).unwrap();

    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 2);
}

#[test]
fn keyed_operations_fail_without_a_primary_key() {
    let schema = tag_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut tag = Record::new(&schema, [("label", "urgent")]).unwrap();
    tag.save(&mut tx).unwrap();

    let err = tag.delete(&mut tx).unwrap_err();
    assert!(err.is_schema_usage());
    assert_eq!(err.to_string(), "Tag has no primary key, cannot delete");

    let err = Record::get(&schema, &mut tx, 1).unwrap_err();
    assert_eq!(err.to_string(), "Tag has no primary key, cannot get");
}

#[test]
fn stale_copies_keep_their_key_after_delete() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);
    let mut tx = db.begin().unwrap();

    let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
    item.save(&mut tx).unwrap();

    let copy = item.clone();
    item.delete(&mut tx).unwrap();

    // Only the deleted copy loses its key
    assert_eq!(item.value("id"), Some(&Value::Null));
    assert_eq!(copy.value("id"), Some(&Value::Integer(1)));
}

use tests::*;

use melba::{Db, Query, Record, Schema, Sqlite};

use pretty_assertions::assert_eq;

use std::sync::Arc;

#[test]
fn commit_persists_across_transactions() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);

    let mut tx = db.begin().unwrap();
    let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
    item.save(&mut tx).unwrap();
    tx.commit().unwrap();

    let mut tx = db.begin().unwrap();
    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 1);
}

#[test]
fn dropping_an_open_transaction_rolls_back() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);

    {
        let mut tx = db.begin().unwrap();
        let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
        item.save(&mut tx).unwrap();
    }

    let mut tx = db.begin().unwrap();
    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 0);
}

#[test]
fn explicit_rollback_discards_writes() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);

    let mut tx = db.begin().unwrap();
    let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
    item.save(&mut tx).unwrap();
    tx.rollback().unwrap();

    let mut tx = db.begin().unwrap();
    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 0);
}

fn insert_then_fail(db: &mut Db, schema: &Arc<Schema>) -> melba::Result<()> {
    let mut tx = db.begin()?;

    let mut item = Record::new(schema, [("name", "Laptop")])?;
    item.save(&mut tx)?;

    // Fails before the commit is reached; the transaction unwinds
    Query::new(schema).filter("price >>> nonsense").all(&mut tx)?;

    tx.commit()?;
    Ok(())
}

#[test]
fn errors_unwind_without_committing() {
    let schema = item_schema();
    let mut db = setup(&[&schema]);

    let err = insert_then_fail(&mut db, &schema).unwrap_err();
    assert!(err.is_storage());

    let mut tx = db.begin().unwrap();
    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 0);
}

#[test]
fn file_backed_databases_persist() {
    let schema = item_schema();
    let dir = tempfile::tempdir().unwrap();
    let driver = Sqlite::open(dir.path().join("app.db"));

    {
        let mut db = Db::connect(&driver).unwrap();
        let mut tx = db.begin().unwrap();
        tx.create_table(&schema).unwrap();

        let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
        item.save(&mut tx).unwrap();
        tx.commit().unwrap();
    }

    // A fresh connection sees the committed row
    let mut db = Db::connect(&driver).unwrap();
    let mut tx = db.begin().unwrap();

    let fetched = Record::get(&schema, &mut tx, 1).unwrap().unwrap();
    assert_eq!(fetched.value("name"), Some(&melba::Value::from("Laptop")));
}

#[test]
fn connecting_by_url() {
    let schema = item_schema();
    let driver = Sqlite::new("sqlite::memory:").unwrap();

    let mut db = Db::connect(&driver).unwrap();
    let mut tx = db.begin().unwrap();
    tx.create_table(&schema).unwrap();

    let mut item = Record::new(&schema, [("name", "Laptop")]).unwrap();
    item.save(&mut tx).unwrap();

    assert_eq!(Query::new(&schema).count(&mut tx).unwrap(), 1);
}

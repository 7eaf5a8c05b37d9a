mod db;
pub use db::Db;

mod query;
pub use query::Query;

mod record;
pub use record::Record;

mod transaction;
pub use transaction::Transaction;

pub use melba_core::{
    schema::{registry, Field, FieldTy, Schema, SchemaBuilder},
    stmt::{Direction, Value},
    Error, Result,
};

#[cfg(feature = "sqlite")]
pub use melba_driver_sqlite::Sqlite;

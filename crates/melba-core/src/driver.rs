mod response;
pub use response::Response;

mod row;
pub use row::Row;

use crate::stmt::Value;
use crate::Result;

use std::borrow::Cow;
use std::fmt::Debug;

/// A storage engine Melba can connect to.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL describing this driver, for diagnostics.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a connection to the storage engine.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single open connection, executing statements synchronously.
///
/// Every call blocks until the storage engine responds; failures surface
/// immediately as storage errors. SQL arrives fully serialized, with one
/// bound value per `?` placeholder, in placeholder order.
pub trait Connection: Send + 'static {
    /// Executes a statement that returns no rows.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Response>;

    /// Executes a query, returning the first row, if any.
    fn fetch_one(&mut self, sql: &str, params: &[Value]) -> Result<Option<Row>>;

    /// Executes a query, returning every row.
    fn fetch_all(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>>;

    /// Starts a transaction.
    fn begin(&mut self) -> Result<()>;

    /// Commits the open transaction.
    fn commit(&mut self) -> Result<()>;

    /// Rolls back the open transaction.
    fn rollback(&mut self) -> Result<()>;
}

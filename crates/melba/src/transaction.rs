use crate::Result;

use melba_core::driver::{Connection, Response, Row};
use melba_core::schema::Schema;
use melba_core::stmt::Value;
use melba_sql::{self as sql, Serializer};

/// A unit of work holding the database connection.
///
/// `BEGIN` is issued when the transaction is created. [`commit`]
/// consumes the transaction on the success path; dropping it without
/// committing issues `ROLLBACK`.
///
/// [`commit`]: Transaction::commit
pub struct Transaction<'db> {
    connection: &'db mut dyn Connection,

    /// Set once commit or rollback has run
    committed: bool,
}

impl<'db> Transaction<'db> {
    pub(crate) fn begin(connection: &'db mut dyn Connection) -> Result<Transaction<'db>> {
        connection.begin()?;

        Ok(Transaction {
            connection,
            committed: false,
        })
    }

    /// Commits the transaction, making its writes durable.
    pub fn commit(mut self) -> Result<()> {
        self.connection.commit()?;
        self.committed = true;
        Ok(())
    }

    /// Rolls the transaction back explicitly.
    ///
    /// Dropping an uncommitted transaction rolls back as well; this
    /// method only makes a rollback failure observable.
    pub fn rollback(mut self) -> Result<()> {
        self.committed = true;
        self.connection.rollback()
    }

    /// Creates the schema's backing table, if it does not exist.
    pub fn create_table(&mut self, schema: &Schema) -> Result<()> {
        self.exec(sql::Statement::create_table(schema))?;
        Ok(())
    }

    /// Drops the schema's backing table, if it exists.
    pub fn drop_table(&mut self, schema: &Schema) -> Result<()> {
        self.exec(sql::Statement::drop_table(schema))?;
        Ok(())
    }

    pub(crate) fn exec(&mut self, statement: impl Into<sql::Statement>) -> Result<Response> {
        let (sql, params) = serialize(&statement.into());
        self.connection.execute(&sql, &params)
    }

    pub(crate) fn fetch_one(&mut self, statement: impl Into<sql::Statement>) -> Result<Option<Row>> {
        let (sql, params) = serialize(&statement.into());
        self.connection.fetch_one(&sql, &params)
    }

    pub(crate) fn fetch_all(&mut self, statement: impl Into<sql::Statement>) -> Result<Vec<Row>> {
        let (sql, params) = serialize(&statement.into());
        self.connection.fetch_all(&sql, &params)
    }
}

fn serialize(statement: &sql::Statement) -> (String, Vec<Value>) {
    let mut params = vec![];
    let sql = Serializer::new().serialize(statement, &mut params);
    (sql, params)
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.committed {
            // Drop cannot report a failed rollback; rollback() exists for
            // callers that need the result.
            let _ = self.connection.rollback();
        }
    }
}

use crate::{Result, Transaction};

use melba_core::driver::{Connection, Driver};

/// A database handle owning one open connection.
///
/// Melba is synchronous: every operation runs on this connection and
/// blocks until the storage engine responds. All work happens inside a
/// [`Transaction`] obtained from [`begin`](Db::begin).
pub struct Db {
    connection: Box<dyn Connection>,
}

impl Db {
    /// Connects to the storage engine behind the given driver.
    pub fn connect(driver: &impl Driver) -> Result<Db> {
        Ok(Db {
            connection: driver.connect()?,
        })
    }

    /// Starts a unit of work.
    ///
    /// The transaction borrows the connection exclusively until it
    /// commits or rolls back; dropping it without committing rolls back.
    pub fn begin(&mut self) -> Result<Transaction<'_>> {
        Transaction::begin(self.connection.as_mut())
    }
}

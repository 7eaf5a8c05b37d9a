mod value;
pub(crate) use value::Value;

use melba_core::{
    driver::{Driver, Response, Row},
    stmt, Error, Result,
};

use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::storage)?;

        if url.scheme() != "sqlite" {
            return Err(Error::storage(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connect(&self) -> Result<Box<dyn melba_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

/// An open SQLite connection.
#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    /// Opens a fresh in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::storage)?;
        Ok(Self { connection })
    }

    /// Opens the database file at `path`, creating it if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::storage)?;
        Ok(Self { connection })
    }
}

impl melba_core::driver::Connection for Connection {
    fn execute(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Response> {
        let mut statement = self.connection.prepare_cached(sql).map_err(Error::storage)?;

        let rows_affected = statement
            .execute(rusqlite::params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::storage)? as u64;

        drop(statement);

        let last_insert_id = self.connection.last_insert_rowid();

        Ok(Response {
            rows_affected,
            last_insert_id: (last_insert_id != 0).then_some(last_insert_id),
        })
    }

    fn fetch_one(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Option<Row>> {
        let mut statement = self.connection.prepare_cached(sql).map_err(Error::storage)?;

        let columns = column_names(&statement);

        let mut rows = statement
            .query(rusqlite::params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::storage)?;

        match rows.next().map_err(Error::storage)? {
            Some(row) => Ok(Some(read_row(&columns, row)?)),
            None => Ok(None),
        }
    }

    fn fetch_all(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Vec<Row>> {
        let mut statement = self.connection.prepare_cached(sql).map_err(Error::storage)?;

        let columns = column_names(&statement);

        let mut rows = statement
            .query(rusqlite::params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::storage)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::storage)? {
            ret.push(read_row(&columns, row)?);
        }

        Ok(ret)
    }

    fn begin(&mut self) -> Result<()> {
        self.connection.execute("BEGIN", []).map_err(Error::storage)?;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.connection.execute("COMMIT", []).map_err(Error::storage)?;
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.connection
            .execute("ROLLBACK", [])
            .map_err(Error::storage)?;
        Ok(())
    }
}

/// Column names must be captured before the statement starts iterating
/// rows.
fn column_names(statement: &rusqlite::Statement<'_>) -> Vec<String> {
    statement
        .column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

fn read_row(columns: &[String], row: &rusqlite::Row<'_>) -> Result<Row> {
    let mut ret = Row::new();

    for (index, column) in columns.iter().enumerate() {
        let value = row.get_ref(index).map_err(Error::storage)?;
        ret.push(column.clone(), Value::from_sql(value)?);
    }

    Ok(ret)
}

use melba_core::stmt::{format_date_time, Value as CoreValue};
use melba_core::{Error, Result};

use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// Bridges Melba values into SQLite's binding types.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

impl Value<'_> {
    /// Converts a fetched SQLite value to a Melba value.
    ///
    /// SQLite's storage classes are narrower than Melba's value set:
    /// booleans come back as integers and date-times as text. Hydration
    /// maps those back per field.
    pub(crate) fn from_sql(value: ValueRef<'_>) -> Result<CoreValue> {
        match value {
            ValueRef::Null => Ok(CoreValue::Null),
            ValueRef::Integer(value) => Ok(CoreValue::Integer(value)),
            ValueRef::Real(value) => Ok(CoreValue::Float(value)),
            ValueRef::Text(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(Error::storage)?;
                Ok(CoreValue::Text(text.to_string()))
            }
            ValueRef::Blob(_) => Err(Error::storage("BLOB columns are not supported")),
        }
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            CoreValue::Boolean(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Boolean(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            CoreValue::DateTime(value) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                format_date_time(value),
            ))),
            CoreValue::Float(value) => Ok(ToSqlOutput::Owned(SqlValue::Real(*value))),
            CoreValue::Integer(value) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*value))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            CoreValue::Text(value) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(value.as_bytes()))),
        }
    }
}

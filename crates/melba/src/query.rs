use crate::{Record, Result, Transaction};

use melba_core::schema::Schema;
use melba_core::stmt::{Direction, Filter, OrderBy, Predicate, Returning, Select, Value};

use std::sync::Arc;

/// An immutable, composable query over one record type.
///
/// Builder methods never mutate: each returns a new `Query` with the
/// requested piece added or replaced, so a base query can be branched
/// and reused. Terminal methods ([`all`], [`first`], [`count`],
/// [`exists`]) compile the accumulated state into a single parameterized
/// `SELECT`.
///
/// [`all`]: Query::all
/// [`first`]: Query::first
/// [`count`]: Query::count
/// [`exists`]: Query::exists
#[derive(Debug, Clone)]
pub struct Query {
    schema: Arc<Schema>,
    filter: Filter,
    order_by: Option<OrderBy>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl Query {
    /// Starts an unfiltered query over every row of the schema's table.
    pub fn new(schema: &Arc<Schema>) -> Query {
        Query {
            schema: schema.clone(),
            filter: Filter::new(),
            order_by: None,
            limit: None,
            offset: None,
        }
    }

    /// Adds one equality predicate per `(field, value)` pair.
    ///
    /// Field names resolve against the schema, so a typo fails fast,
    /// before any SQL is built. Pairs within one call and across calls
    /// all compose with `AND`.
    pub fn filter_by<I, K, V>(&self, pairs: I) -> Result<Query>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut query = self.clone();

        for (name, value) in pairs {
            let field = self.schema.resolve_field(name.as_ref())?;
            query
                .filter
                .push(Predicate::eq(field.column_name(), value.into()));
        }

        Ok(query)
    }

    /// Appends a raw SQL predicate, `AND`-composed with every other
    /// predicate.
    ///
    /// The fragment is trusted verbatim; nothing parses, validates, or
    /// escapes it, so it must never carry untrusted input. A malformed
    /// fragment surfaces as a storage error when the query executes.
    pub fn filter(&self, fragment: impl Into<String>) -> Query {
        let mut query = self.clone();
        query.filter.push(Predicate::raw(fragment));
        query
    }

    /// Orders results by one field, replacing any previous ordering.
    pub fn order_by(&self, field: &str, direction: Direction) -> Result<Query> {
        let field = self.schema.resolve_field(field)?;

        let mut query = self.clone();
        query.order_by = Some(OrderBy {
            column: field.column_name().to_string(),
            direction,
        });
        Ok(query)
    }

    /// Caps the number of returned rows, replacing any previous limit.
    pub fn limit(&self, limit: i64) -> Query {
        let mut query = self.clone();
        query.limit = Some(limit);
        query
    }

    /// Skips rows before returning results, replacing any previous
    /// offset.
    pub fn offset(&self, offset: i64) -> Query {
        let mut query = self.clone();
        query.offset = Some(offset);
        query
    }

    /// Executes the query, hydrating every matching row.
    pub fn all(&self, tx: &mut Transaction<'_>) -> Result<Vec<Record>> {
        let rows = tx.fetch_all(self.select())?;

        rows.into_iter()
            .map(|row| Record::from_row(&self.schema, row))
            .collect()
    }

    /// Executes the query capped at one row. The query itself is
    /// untouched; `first` works on a copy forced to `LIMIT 1`.
    pub fn first(&self, tx: &mut Transaction<'_>) -> Result<Option<Record>> {
        let query = self.limit(1);

        match tx.fetch_one(query.select())? {
            Some(row) => Ok(Some(Record::from_row(&self.schema, row)?)),
            None => Ok(None),
        }
    }

    /// Counts matching rows with `SELECT COUNT(*)`, ignoring any
    /// ordering, limit, and offset.
    pub fn count(&self, tx: &mut Transaction<'_>) -> Result<i64> {
        let statement = Select {
            table: self.schema.table.clone(),
            returning: Returning::Count,
            filter: self.filter.clone(),
            order_by: None,
            limit: None,
            offset: None,
        };

        let count = tx
            .fetch_one(statement)?
            .and_then(|row| row.get("COUNT(*)").and_then(Value::as_integer));

        Ok(count.unwrap_or(0))
    }

    /// Returns `true` when at least one row matches.
    pub fn exists(&self, tx: &mut Transaction<'_>) -> Result<bool> {
        Ok(self.count(tx)? > 0)
    }

    /// Compiles the accumulated state into a `SELECT` statement.
    fn select(&self) -> Select {
        Select {
            table: self.schema.table.clone(),
            returning: Returning::Columns(self.schema.column_names()),
            filter: self.filter.clone(),
            order_by: self.order_by.clone(),
            limit: self.limit,
            offset: self.offset,
        }
    }
}

mod params;
pub use params::Params;

use crate::stmt::{
    ColumnDef, CreateTable, Delete, Direction, DropTable, Filter, Insert, OrderBy, Predicate,
    Returning, Select, Statement, Update, Value,
};

use melba_core::stmt::format_date_time;

use std::fmt::{self, Write};

/// Renders statements as SQL strings.
///
/// The dialect is fixed: positional `?` placeholders, no identifier
/// quoting, no trailing semicolon. Values bound at execution time go
/// through placeholders; only `DEFAULT` clauses embed literals.
#[derive(Debug, Default)]
pub struct Serializer;

impl Serializer {
    pub fn new() -> Serializer {
        Serializer
    }

    pub fn serialize(&self, statement: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        fmt.statement(statement).unwrap();

        ret
    }
}

struct Formatter<'a, T> {
    /// Write the SQL string here
    dst: &'a mut String,

    /// Bound parameters are pushed here, in placeholder order
    params: &'a mut T,
}

impl<T: Params> Formatter<'_, T> {
    fn statement(&mut self, statement: &Statement) -> fmt::Result {
        match statement {
            Statement::CreateTable(stmt) => self.create_table(stmt),
            Statement::Delete(stmt) => self.delete(stmt),
            Statement::DropTable(stmt) => self.drop_table(stmt),
            Statement::Insert(stmt) => self.insert(stmt),
            Statement::Select(stmt) => self.select(stmt),
            Statement::Update(stmt) => self.update(stmt),
        }
    }

    fn create_table(&mut self, stmt: &CreateTable) -> fmt::Result {
        write!(self.dst, "CREATE TABLE IF NOT EXISTS {} (", stmt.name)?;

        let mut s = "";
        for column in &stmt.columns {
            write!(self.dst, "{s}")?;
            self.column_def(column)?;
            s = ", ";
        }

        write!(self.dst, ")")
    }

    fn column_def(&mut self, column: &ColumnDef) -> fmt::Result {
        write!(self.dst, "{} {}", column.name, column.ty)?;

        if column.primary_key {
            write!(self.dst, " PRIMARY KEY")?;
        }

        if column.not_null {
            write!(self.dst, " NOT NULL")?;
        }

        if let Some(default) = &column.default {
            write!(self.dst, " DEFAULT ")?;
            self.literal(default)?;
        }

        Ok(())
    }

    fn drop_table(&mut self, stmt: &DropTable) -> fmt::Result {
        write!(self.dst, "DROP TABLE IF EXISTS {}", stmt.name)
    }

    fn insert(&mut self, stmt: &Insert) -> fmt::Result {
        write!(self.dst, "INSERT INTO {} (", stmt.table)?;

        let mut s = "";
        for column in &stmt.columns {
            write!(self.dst, "{s}{column}")?;
            s = ", ";
        }

        write!(self.dst, ") VALUES (")?;

        s = "";
        for value in &stmt.values {
            write!(self.dst, "{s}")?;
            self.placeholder(value)?;
            s = ", ";
        }

        write!(self.dst, ")")
    }

    fn update(&mut self, stmt: &Update) -> fmt::Result {
        write!(self.dst, "UPDATE {} SET ", stmt.table)?;

        let mut s = "";
        for assignment in &stmt.assignments {
            write!(self.dst, "{s}{} = ", assignment.column)?;
            self.placeholder(&assignment.value)?;
            s = ", ";
        }

        self.filter(&stmt.filter)
    }

    fn delete(&mut self, stmt: &Delete) -> fmt::Result {
        write!(self.dst, "DELETE FROM {}", stmt.table)?;
        self.filter(&stmt.filter)
    }

    fn select(&mut self, stmt: &Select) -> fmt::Result {
        write!(self.dst, "SELECT ")?;

        match &stmt.returning {
            Returning::Columns(columns) => {
                let mut s = "";
                for column in columns {
                    write!(self.dst, "{s}{column}")?;
                    s = ", ";
                }
            }
            Returning::Count => write!(self.dst, "COUNT(*)")?,
        }

        write!(self.dst, " FROM {}", stmt.table)?;

        self.filter(&stmt.filter)?;

        if let Some(order_by) = &stmt.order_by {
            self.order_by(order_by)?;
        }

        // LIMIT must come ahead of OFFSET; an offset with no limit gets
        // the "no limit" sentinel to keep the clause valid.
        if let Some(limit) = stmt.limit {
            write!(self.dst, " LIMIT {limit}")?;
        } else if stmt.offset.is_some() {
            write!(self.dst, " LIMIT -1")?;
        }

        if let Some(offset) = stmt.offset {
            write!(self.dst, " OFFSET {offset}")?;
        }

        Ok(())
    }

    fn filter(&mut self, filter: &Filter) -> fmt::Result {
        if filter.is_empty() {
            return Ok(());
        }

        write!(self.dst, " WHERE ")?;

        let mut s = "";
        for predicate in &filter.predicates {
            write!(self.dst, "{s}")?;
            self.predicate(predicate)?;
            s = " AND ";
        }

        Ok(())
    }

    fn predicate(&mut self, predicate: &Predicate) -> fmt::Result {
        match predicate {
            Predicate::Eq { column, value } => {
                write!(self.dst, "{column} = ")?;
                self.placeholder(value)
            }
            Predicate::Raw(fragment) => write!(self.dst, "{fragment}"),
        }
    }

    fn order_by(&mut self, order_by: &OrderBy) -> fmt::Result {
        let direction = match order_by.direction {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };

        write!(self.dst, " ORDER BY {} {direction}", order_by.column)
    }

    /// Emits a `?` placeholder and records the bound value.
    fn placeholder(&mut self, value: &Value) -> fmt::Result {
        self.params.push(value);
        write!(self.dst, "?")
    }

    /// Emits a value as an inline SQL literal.
    fn literal(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::Boolean(true) => write!(self.dst, "TRUE"),
            Value::Boolean(false) => write!(self.dst, "FALSE"),
            Value::DateTime(value) => write!(self.dst, "'{}'", format_date_time(value)),
            Value::Float(value) => write!(self.dst, "{value:?}"),
            Value::Integer(value) => write!(self.dst, "{value}"),
            Value::Null => write!(self.dst, "NULL"),
            Value::Text(value) => write!(self.dst, "'{}'", value.replace('\'', "''")),
        }
    }
}

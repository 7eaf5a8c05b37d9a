use super::{Statement, Value};

/// `INSERT INTO <table> (<columns>) VALUES (?, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table receiving the row
    pub table: String,

    /// Column names, in schema declaration order
    pub columns: Vec<String>,

    /// One bound value per column
    pub values: Vec<Value>,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

use crate::stmt::Value;

use indexmap::IndexMap;

/// A fetched row: column values keyed by column name, in projection
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    /// Returns an empty row.
    pub fn new() -> Row {
        Row::default()
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Looks up a column value by name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// Removes and returns a column value by name.
    pub fn take(&mut self, column: &str) -> Option<Value> {
        self.columns.swap_remove(column)
    }

    /// Appends a column to the row.
    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.insert(column.into(), value);
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Row {
            columns: iter.into_iter().collect(),
        }
    }
}

use super::{ColumnDef, Statement};

use melba_core::schema::Schema;

/// `CREATE TABLE IF NOT EXISTS <table> (<column defs>)`.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions, in schema declaration order
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    /// Creates the backing table for a schema, if it does not exist.
    pub fn create_table(schema: &Schema) -> Statement {
        CreateTable {
            name: schema.table.clone(),
            columns: schema.fields.iter().map(ColumnDef::from_field).collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}

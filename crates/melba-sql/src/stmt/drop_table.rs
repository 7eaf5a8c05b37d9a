use super::Statement;

use melba_core::schema::Schema;

/// `DROP TABLE IF EXISTS <table>`.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// Name of the table
    pub name: String,
}

impl Statement {
    /// Drops the backing table for a schema, if it exists.
    pub fn drop_table(schema: &Schema) -> Statement {
        DropTable {
            name: schema.table.clone(),
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}

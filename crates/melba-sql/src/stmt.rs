mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

pub use melba_core::stmt::*;

/// Any statement the serializer can render: the data statements from
/// melba-core plus the schema statements defined here.
#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl From<melba_core::stmt::Statement> for Statement {
    fn from(value: melba_core::stmt::Statement) -> Self {
        match value {
            melba_core::stmt::Statement::Delete(stmt) => Self::Delete(stmt),
            melba_core::stmt::Statement::Insert(stmt) => Self::Insert(stmt),
            melba_core::stmt::Statement::Select(stmt) => Self::Select(stmt),
            melba_core::stmt::Statement::Update(stmt) => Self::Update(stmt),
        }
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}

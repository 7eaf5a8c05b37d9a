use melba_core::schema::Field;
use melba_core::stmt::Value;

/// A column definition within a `CREATE TABLE` statement.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Name of the column
    pub name: String,

    /// SQL type, e.g. `VARCHAR(255)`
    pub ty: String,

    /// Emit `PRIMARY KEY`
    pub primary_key: bool,

    /// Emit `NOT NULL`
    pub not_null: bool,

    /// Default rendered as an inline literal; `None` emits no `DEFAULT`
    /// clause
    pub default: Option<Value>,
}

impl ColumnDef {
    /// Builds the definition for a field's backing column.
    pub fn from_field(field: &Field) -> ColumnDef {
        ColumnDef {
            name: field.column_name().to_string(),
            ty: field.sql_type(),
            primary_key: field.primary_key,
            not_null: !field.nullable,
            default: field.default.clone().filter(|value| !value.is_null()),
        }
    }
}

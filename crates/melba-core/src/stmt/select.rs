use super::{Filter, OrderBy, Returning, Statement};

/// `SELECT <returning> FROM <table>` with optional filter, ordering, and
/// pagination clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table to select from
    pub table: String,

    /// Projection: named columns or `COUNT(*)`
    pub returning: Returning,

    /// Which rows to return
    pub filter: Filter,

    /// Optional single-column ordering
    pub order_by: Option<OrderBy>,

    /// Maximum number of rows to return
    pub limit: Option<i64>,

    /// Number of rows to skip
    pub offset: Option<i64>,
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

use super::{Assignment, Filter, Statement};

/// `UPDATE <table> SET <column> = ?, ... WHERE ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table being updated
    pub table: String,

    /// `SET` clauses, in schema declaration order
    pub assignments: Vec<Assignment>,

    /// Which rows to update; for record saves this is the primary-key
    /// predicate
    pub filter: Filter,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}

/// The projection of a `SELECT` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// Named columns, in schema declaration order
    Columns(Vec<String>),

    /// `COUNT(*)`
    Count,
}

use super::Value;

/// A single `SET <column> = ?` clause with its bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Column being assigned
    pub column: String,

    /// Value bound to the placeholder
    pub value: Value,
}

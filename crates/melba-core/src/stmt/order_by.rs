use super::Direction;

/// A single-column ordering. A select carries at most one; setting a new
/// ordering replaces the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// Column to sort by
    pub column: String,

    /// Sort direction
    pub direction: Direction,
}

mod assignment;
pub use assignment::Assignment;

mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod order_by;
pub use order_by::OrderBy;

mod predicate;
pub use predicate::Predicate;

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

mod value_datetime;
pub use value_datetime::{format_date_time, parse_date_time, DATE_TIME_FORMAT};

use std::fmt;

#[derive(Clone, PartialEq)]
pub enum Statement {
    /// Delete one or more existing rows
    Delete(Delete),

    /// Insert a row
    Insert(Insert),

    /// Query the database
    Select(Select),

    /// Update one or more existing rows
    Update(Update),
}

impl Statement {
    /// Attempts to return a reference to an inner [`Select`].
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    /// Attempts to return a reference to an inner [`Insert`].
    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            Self::Insert(insert) => Some(insert),
            _ => None,
        }
    }

    /// Returns `true` if the statement produces rows when executed.
    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select(_))
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete(v) => v.fmt(f),
            Self::Insert(v) => v.fmt(f),
            Self::Select(v) => v.fmt(f),
            Self::Update(v) => v.fmt(f),
        }
    }
}

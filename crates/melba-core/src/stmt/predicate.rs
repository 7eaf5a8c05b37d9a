use super::Value;

/// A single `WHERE` term.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Column equality against a bound parameter: `<column> = ?`
    Eq { column: String, value: Value },

    /// Caller-supplied SQL fragment, emitted verbatim.
    ///
    /// Fragments are never parsed or validated; a malformed fragment
    /// surfaces as a storage error when the statement executes.
    Raw(String),
}

impl Predicate {
    /// A `<column> = ?` predicate with `value` bound to the placeholder.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Predicate {
        Predicate::Eq {
            column: column.into(),
            value: value.into(),
        }
    }

    /// A verbatim SQL fragment predicate.
    pub fn raw(fragment: impl Into<String>) -> Predicate {
        Predicate::Raw(fragment.into())
    }
}

use super::Predicate;

/// Conjunction of predicates. Terms are joined with `AND` in generated
/// SQL; an empty filter means no `WHERE` clause at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub predicates: Vec<Predicate>,
}

impl Filter {
    /// Returns an empty filter matching every row.
    pub fn new() -> Filter {
        Filter::default()
    }

    /// Returns `true` if the filter has no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Adds a predicate to the conjunction.
    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }
}

impl From<Predicate> for Filter {
    fn from(value: Predicate) -> Self {
        Filter {
            predicates: vec![value],
        }
    }
}

use melba_core::stmt::Value;

/// Sink for bound parameters, filled in placeholder order as a statement
/// renders.
pub trait Params {
    fn push(&mut self, value: &Value);
}

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) {
        self.push(value.clone());
    }
}

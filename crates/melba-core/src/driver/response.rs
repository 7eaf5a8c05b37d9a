/// The outcome of executing a statement that returns no rows.
#[derive(Debug, Clone, Copy)]
pub struct Response {
    /// Number of rows the statement affected
    pub rows_affected: u64,

    /// Engine-assigned row identifier, meaningful after an `INSERT` that
    /// left the key to the engine
    pub last_insert_id: Option<i64>,
}

use super::Error;

/// Error for schema misuse caught before any SQL is built.
#[derive(Debug)]
pub(super) struct SchemaUsageError {
    pub(super) kind: SchemaUsageErrorKind,
}

#[derive(Debug)]
pub(super) enum SchemaUsageErrorKind {
    /// A filter, ordering, or constructor named a field the schema does
    /// not declare
    UnknownField { schema: String, field: String },

    /// A keyed operation was attempted against a schema with no primary
    /// key
    MissingPrimaryKey {
        schema: String,
        operation: &'static str,
    },

    /// Two fields declared as primary key on the same schema
    DuplicatePrimaryKey {
        schema: String,
        first: String,
        second: String,
    },

    /// Two fields declared with the same name on the same schema
    DuplicateField { schema: String, field: String },
}

impl std::error::Error for SchemaUsageError {}

impl core::fmt::Display for SchemaUsageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            SchemaUsageErrorKind::UnknownField { schema, field } => {
                write!(f, "{schema} has no field named {field}")
            }
            SchemaUsageErrorKind::MissingPrimaryKey { schema, operation } => {
                write!(f, "{schema} has no primary key, cannot {operation}")
            }
            SchemaUsageErrorKind::DuplicatePrimaryKey {
                schema,
                first,
                second,
            } => {
                write!(
                    f,
                    "{schema} declares more than one primary key: {first}, {second}"
                )
            }
            SchemaUsageErrorKind::DuplicateField { schema, field } => {
                write!(f, "{schema} declares more than one field named {field}")
            }
        }
    }
}

impl Error {
    /// Creates a schema-usage error for a reference to an undeclared
    /// field.
    pub fn unknown_field(schema: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaUsage(SchemaUsageError {
            kind: SchemaUsageErrorKind::UnknownField {
                schema: schema.into(),
                field: field.into(),
            },
        }))
    }

    /// Creates a schema-usage error for a keyed operation against a
    /// schema with no primary key.
    pub fn missing_primary_key(schema: impl Into<String>, operation: &'static str) -> Error {
        Error::from(super::ErrorKind::SchemaUsage(SchemaUsageError {
            kind: SchemaUsageErrorKind::MissingPrimaryKey {
                schema: schema.into(),
                operation,
            },
        }))
    }

    /// Creates a schema-usage error for a schema declaring two primary
    /// keys.
    pub fn duplicate_primary_key(
        schema: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::SchemaUsage(SchemaUsageError {
            kind: SchemaUsageErrorKind::DuplicatePrimaryKey {
                schema: schema.into(),
                first: first.into(),
                second: second.into(),
            },
        }))
    }

    /// Creates a schema-usage error for a schema declaring the same
    /// field name twice.
    pub fn duplicate_field(schema: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaUsage(SchemaUsageError {
            kind: SchemaUsageErrorKind::DuplicateField {
                schema: schema.into(),
                field: field.into(),
            },
        }))
    }

    /// Returns `true` if this error is a schema-usage error.
    pub fn is_schema_usage(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaUsage(_))
    }
}

use super::Error;

/// Error when a value fails a field's validation rules.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// Value type does not match the field type
    WrongType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Text value exceeds the field's maximum length
    LengthExceeded {
        field: String,
        length: usize,
        max_length: usize,
    },

    /// Null assigned to a non-nullable field
    NotNullable { field: String },

    /// Integer other than 0 or 1 assigned to a boolean field
    InvalidBoolean { field: String, value: i64 },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::WrongType {
                field,
                expected,
                actual,
            } => {
                write!(f, "{field} must be {expected}, got {actual}")
            }
            ValidationErrorKind::LengthExceeded {
                field,
                length,
                max_length,
            } => {
                write!(f, "{field} cannot exceed {max_length} characters, got {length}")
            }
            ValidationErrorKind::NotNullable { field } => {
                write!(f, "{field} cannot be null")
            }
            ValidationErrorKind::InvalidBoolean { field, value } => {
                write!(f, "{field} must be 0, 1, or a boolean, got {value}")
            }
        }
    }
}

impl Error {
    /// Creates a validation error for a value of the wrong type.
    pub fn wrong_type(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::WrongType {
                field: field.into(),
                expected,
                actual,
            },
        }))
    }

    /// Creates a validation error for text exceeding a field's maximum
    /// length.
    pub fn length_exceeded(
        field: impl Into<String>,
        length: usize,
        max_length: usize,
    ) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::LengthExceeded {
                field: field.into(),
                length,
                max_length,
            },
        }))
    }

    /// Creates a validation error for null assigned to a non-nullable
    /// field.
    pub fn not_nullable(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::NotNullable {
                field: field.into(),
            },
        }))
    }

    /// Creates a validation error for an integer that is not a valid
    /// boolean encoding.
    pub fn invalid_boolean(field: impl Into<String>, value: i64) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::InvalidBoolean {
                field: field.into(),
                value,
            },
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}

use crate::stmt::{self, Value};
use crate::{Error, Result};

/// Maximum length applied to text fields that do not set one.
const DEFAULT_MAX_LENGTH: usize = 255;

/// A typed column descriptor declared on a record type.
///
/// A field couples a name with a [`FieldTy`] plus the constraints the
/// record enforces on every write: nullability, an optional default, and
/// the primary-key flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name, as declared on the record type
    pub name: String,

    /// Overrides the backing column name; `None` means the column is
    /// named after the field
    pub column: Option<String>,

    /// The field type, with its type-specific options
    pub ty: FieldTy,

    /// True if this field is the schema's primary key
    pub primary_key: bool,

    /// True if the field accepts null
    pub nullable: bool,

    /// Value applied when construction does not supply one
    pub default: Option<Value>,
}

/// The type of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    Boolean,

    DateTime {
        /// Stamp the current time at construction when no value is given
        auto_now_add: bool,
    },

    Float,

    Integer,

    Text {
        /// Maximum length, in characters
        max_length: usize,
    },
}

impl Field {
    fn new(name: impl Into<String>, ty: FieldTy) -> Field {
        Field {
            name: name.into(),
            column: None,
            ty,
            primary_key: false,
            nullable: true,
            default: None,
        }
    }

    /// Declares a boolean field.
    pub fn boolean(name: impl Into<String>) -> Field {
        Field::new(name, FieldTy::Boolean)
    }

    /// Declares a date-time field.
    pub fn date_time(name: impl Into<String>) -> Field {
        Field::new(name, FieldTy::DateTime { auto_now_add: false })
    }

    /// Declares a float field.
    pub fn float(name: impl Into<String>) -> Field {
        Field::new(name, FieldTy::Float)
    }

    /// Declares an integer field.
    pub fn integer(name: impl Into<String>) -> Field {
        Field::new(name, FieldTy::Integer)
    }

    /// Declares a text field with the default 255-character limit.
    pub fn text(name: impl Into<String>) -> Field {
        Field::new(
            name,
            FieldTy::Text {
                max_length: DEFAULT_MAX_LENGTH,
            },
        )
    }

    /// Marks this field as the schema's primary key.
    pub fn primary_key(mut self) -> Field {
        self.primary_key = true;
        self
    }

    /// Rejects null on every write.
    pub fn not_null(mut self) -> Field {
        self.nullable = false;
        self
    }

    /// Sets the value applied when construction does not supply one.
    pub fn default_value(mut self, value: impl Into<Value>) -> Field {
        self.default = Some(value.into());
        self
    }

    /// Backs this field with a differently named column.
    pub fn column(mut self, name: impl Into<String>) -> Field {
        self.column = Some(name.into());
        self
    }

    /// Caps the length of a text field, replacing the default.
    ///
    /// # Panics
    ///
    /// Panics if the field is not a text field.
    pub fn max_length(mut self, max_length: usize) -> Field {
        match &mut self.ty {
            FieldTy::Text { max_length: max } => *max = max_length,
            _ => panic!(
                "max_length applies to text fields; `{}` is {}",
                self.name,
                self.ty.name()
            ),
        }
        self
    }

    /// Stamps the current time at construction when no value is supplied.
    /// The stamp is taken once; updates never refresh it.
    ///
    /// # Panics
    ///
    /// Panics if the field is not a date-time field.
    pub fn auto_now_add(mut self) -> Field {
        match &mut self.ty {
            FieldTy::DateTime { auto_now_add } => *auto_now_add = true,
            _ => panic!(
                "auto_now_add applies to date-time fields; `{}` is {}",
                self.name,
                self.ty.name()
            ),
        }
        self
    }

    /// Name of the backing column.
    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }

    /// Checks a value against the field's type and constraints.
    ///
    /// Every write path runs this before a value is stored: construction,
    /// assignment, and row hydration.
    pub fn validate(&self, value: &Value) -> Result<()> {
        if value.is_null() {
            if self.nullable {
                return Ok(());
            }
            return Err(Error::not_nullable(&self.name));
        }

        match &self.ty {
            FieldTy::Boolean => match value {
                Value::Boolean(_) | Value::Integer(0) | Value::Integer(1) => Ok(()),
                Value::Integer(other) => Err(Error::invalid_boolean(&self.name, *other)),
                _ => Err(self.wrong_type(value)),
            },
            FieldTy::DateTime { .. } => match value {
                Value::DateTime(_) => Ok(()),
                _ => Err(self.wrong_type(value)),
            },
            FieldTy::Float => match value {
                Value::Float(_) | Value::Integer(_) => Ok(()),
                _ => Err(self.wrong_type(value)),
            },
            FieldTy::Integer => match value {
                Value::Integer(_) => Ok(()),
                _ => Err(self.wrong_type(value)),
            },
            FieldTy::Text { max_length } => match value {
                Value::Text(text) => {
                    let length = text.chars().count();
                    if length > *max_length {
                        Err(Error::length_exceeded(&self.name, length, *max_length))
                    } else {
                        Ok(())
                    }
                }
                _ => Err(self.wrong_type(value)),
            },
        }
    }

    /// Normalizes a validated value for storage.
    ///
    /// Integer 0/1 becomes a boolean for boolean fields; integers widen
    /// to floats for float fields. Everything else passes through.
    pub fn coerce(&self, value: Value) -> Value {
        match (&self.ty, value) {
            (FieldTy::Boolean, Value::Integer(value)) => Value::Boolean(value != 0),
            (FieldTy::Float, Value::Integer(value)) => Value::Float(value as f64),
            (_, value) => value,
        }
    }

    /// Converts a fetched storage value back to this field's kind.
    ///
    /// SQLite hands back integers for boolean columns and canonical text
    /// for date-time columns; the inverse conversions happen here before
    /// a hydrated value is validated.
    pub fn decode(&self, value: Value) -> Result<Value> {
        match (&self.ty, value) {
            (FieldTy::DateTime { .. }, Value::Text(text)) => {
                match stmt::parse_date_time(&text) {
                    Some(value) => Ok(Value::DateTime(value)),
                    None => Err(Error::wrong_type(&self.name, "date-time", "text")),
                }
            }
            (FieldTy::Boolean, Value::Integer(value)) if value == 0 || value == 1 => {
                Ok(Value::Boolean(value != 0))
            }
            (FieldTy::Float, Value::Integer(value)) => Ok(Value::Float(value as f64)),
            (_, value) => Ok(value),
        }
    }

    /// SQL type of the backing column.
    pub fn sql_type(&self) -> String {
        match &self.ty {
            FieldTy::Boolean => "BOOLEAN".to_string(),
            FieldTy::DateTime { .. } => "DATETIME".to_string(),
            FieldTy::Float => "FLOAT".to_string(),
            FieldTy::Integer => "INTEGER".to_string(),
            FieldTy::Text { max_length } => format!("VARCHAR({max_length})"),
        }
    }

    fn wrong_type(&self, value: &Value) -> Error {
        Error::wrong_type(&self.name, self.ty.name(), value.type_name())
    }
}

impl FieldTy {
    /// Name of the field type, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::DateTime { .. } => "date-time",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Text { .. } => "text",
        }
    }

    /// Returns `true` if construction should stamp the current time when
    /// no value is supplied.
    pub fn auto_now_add(&self) -> bool {
        matches!(self, Self::DateTime { auto_now_add: true })
    }
}

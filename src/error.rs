//! Error types
//!
//! Two very different kinds of failure come out of a validation run:
//!
//! - [`FieldError`] and [`RecordFailure`] are *expected* output. They are never
//!   propagated to the caller as errors; they are written into an
//!   [`ErrorReport`](crate::ErrorReport).
//! - [`ValidatorFault`] is a programming error raised by a record-level
//!   validator. It aborts the run and is returned as `Err`.

use crate::value::{Value, ValueKind};
use std::error::Error as StdError;
use std::fmt;

/// Coarse classification of a [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Value absent or empty when mandatory.
    Required,
    /// Value present with the wrong representation.
    TypeMismatch,
    /// Sequence or text length out of bounds.
    Length,
    /// Value not in the permitted set.
    Choice,
    /// String failed a structural parse (date, email, URL).
    Format,
    /// A custom hook rejected the value.
    Custom,
}

/// Why a single field failed its rule.
///
/// The `Display` output is the message that lands in the error report.
///
/// # Examples
///
/// ```
/// use fieldwise::{ErrorKind, FieldError, ValueKind};
///
/// let err = FieldError::TypeMismatch { expected: ValueKind::Integer };
/// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
/// assert_eq!(err.to_string(), "value must be integer");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Absent, null, or empty where a value is mandatory.
    Required,
    /// The value's representation does not match the rule.
    TypeMismatch {
        /// The representation the rule accepts.
        expected: ValueKind,
    },
    /// Fewer elements than the configured minimum.
    TooShort {
        /// Configured minimum.
        min: usize,
        /// Observed length.
        actual: usize,
    },
    /// More elements (or characters) than the configured maximum.
    TooLong {
        /// Configured maximum.
        max: usize,
        /// Observed length.
        actual: usize,
    },
    /// Not one of the permitted values.
    Choice {
        /// The permitted values.
        choices: Vec<Value>,
    },
    /// The string does not have the expected structure.
    Format {
        /// Human-readable description of what was expected.
        expected: String,
    },
    /// Message from a custom hook.
    Custom(String),
}

impl FieldError {
    /// Build a format error from a description of the expected layout.
    pub fn format(expected: impl Into<String>) -> Self {
        FieldError::Format {
            expected: expected.into(),
        }
    }

    /// Build a custom error carrying `message` verbatim.
    pub fn custom(message: impl Into<String>) -> Self {
        FieldError::Custom(message.into())
    }

    /// The taxonomy bucket this error falls in.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::Required => ErrorKind::Required,
            FieldError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            FieldError::TooShort { .. } | FieldError::TooLong { .. } => ErrorKind::Length,
            FieldError::Choice { .. } => ErrorKind::Choice,
            FieldError::Format { .. } => ErrorKind::Format,
            FieldError::Custom(_) => ErrorKind::Custom,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => f.write_str("field is required"),
            FieldError::TypeMismatch { expected } => write!(f, "value must be {}", expected),
            FieldError::TooShort { min, .. } => write!(f, "length must be at least {}", min),
            FieldError::TooLong { max, .. } => write!(f, "length must be at most {}", max),
            FieldError::Choice { choices } => {
                f.write_str("value must be one of [")?;
                for (i, choice) in choices.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", choice)?;
                }
                f.write_str("]")
            }
            FieldError::Format { expected } => f.write_str(expected),
            FieldError::Custom(message) => f.write_str(message),
        }
    }
}

impl StdError for FieldError {}

/// Outcome of a record-level validator that did not pass.
///
/// `Field` and `NonField` are ordinary validation failures and end up in the
/// report. `Fatal` signals a bug or broken invariant inside the validator and
/// aborts the run.
///
/// # Examples
///
/// ```
/// use fieldwise::RecordFailure;
///
/// let failure = RecordFailure::field("age", "age must be >= 18");
/// assert_eq!(failure.field_name(), Some("age"));
///
/// let failure = RecordFailure::non_field("passwords do not match");
/// assert_eq!(failure.field_name(), None);
/// ```
#[derive(Debug)]
pub enum RecordFailure {
    /// Failure attributed to one named field.
    Field {
        /// The field the message is filed under.
        field: String,
        /// The message.
        message: String,
    },
    /// Failure attributed to the record as a whole.
    NonField(String),
    /// Not a validation failure at all; aborts the run.
    Fatal(Box<dyn StdError + Send + Sync>),
}

impl RecordFailure {
    /// A failure filed under `field`.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        RecordFailure::Field {
            field: field.into(),
            message: message.into(),
        }
    }

    /// A failure filed under the record-level key.
    pub fn non_field(message: impl Into<String>) -> Self {
        RecordFailure::NonField(message.into())
    }

    /// A programming error that must not be folded into the report.
    pub fn fatal(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        RecordFailure::Fatal(source.into())
    }

    /// The field this failure is attributed to, if any.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            RecordFailure::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<String> for RecordFailure {
    fn from(message: String) -> Self {
        RecordFailure::NonField(message)
    }
}

impl From<&str> for RecordFailure {
    fn from(message: &str) -> Self {
        RecordFailure::NonField(message.to_string())
    }
}

impl fmt::Display for RecordFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFailure::Field { field, message } => write!(f, "{}: {}", field, message),
            RecordFailure::NonField(message) => f.write_str(message),
            RecordFailure::Fatal(source) => write!(f, "fatal: {}", source),
        }
    }
}

/// A record-level validator failed with something other than a validation
/// failure.
///
/// Returned as `Err` from [`Schema::validate`](crate::Schema::validate); the
/// partially built report is discarded.
#[derive(Debug)]
pub struct ValidatorFault {
    index: usize,
    source: Box<dyn StdError + Send + Sync>,
}

impl ValidatorFault {
    pub(crate) fn new(index: usize, source: Box<dyn StdError + Send + Sync>) -> Self {
        ValidatorFault { index, source }
    }

    /// Position of the failing validator in attachment order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Consume and return the underlying error.
    pub fn into_source(self) -> Box<dyn StdError + Send + Sync> {
        self.source
    }
}

impl fmt::Display for ValidatorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record validator #{} failed: {}", self.index, self.source)
    }
}

impl StdError for ValidatorFault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

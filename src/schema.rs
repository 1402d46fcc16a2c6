//! Record validation
//!
//! A [`Schema`] maps field names to [`FieldRule`]s and carries an ordered list
//! of record-level validators. [`Schema::validate`] runs both phases over one
//! input [`Record`]:
//!
//! 1. Every field rule, in the order fields were added, against the record's
//!    value for that name. At most one message per field.
//! 2. Every record-level validator, in attachment order. Failures attributed to
//!    a field are appended to that field's list; the rest go under
//!    [`NON_FIELD_ERRORS`](crate::NON_FIELD_ERRORS).
//!
//! # Sharing
//!
//! A built schema is immutable and `Send + Sync`, so one instance can serve
//! any number of concurrent runs. Each run builds its own report. Finish
//! configuration (fields, hooks, validators) before sharing the schema; the
//! builder methods consume `self` to make that the natural path.
//!
//! # Examples
//!
//! ```
//! use fieldwise::{hook, record, FieldRule, RecordFailure, Schema, Validation};
//!
//! let schema = Schema::new()
//!     .field("name", FieldRule::text().required().max_length(20).with_hook(hook::letters_only()))
//!     .field("age", FieldRule::integer().required())
//!     .validator(|r: &fieldwise::Record| match r.get("age").and_then(|v| v.as_i64()) {
//!         Some(age) if age < 18 => Err(RecordFailure::field("age", "age must be >= 18")),
//!         _ => Ok(()),
//!     });
//!
//! let outcome = schema
//!     .validate(&record! { "name" => "Krishna123", "age" => 17 })
//!     .expect("validators do not fault");
//!
//! match outcome {
//!     Validation::Failure(report) => {
//!         assert_eq!(report.get("name"), Some(&["must contain letters only".to_string()][..]));
//!         assert_eq!(report.get("age"), Some(&["age must be >= 18".to_string()][..]));
//!     }
//!     Validation::Success(()) => panic!("expected errors"),
//! }
//! ```

use crate::error::{FieldError, RecordFailure, ValidatorFault};
use crate::field::FieldRule;
use crate::report::ErrorReport;
use crate::value::Record;
use crate::Validation;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Result of a complete validation run: the valid-signal or a report.
pub type Outcome = Validation<(), ErrorReport>;

/// A check over the whole record.
///
/// Implemented for any `Fn(&Record) -> Result<(), RecordFailure>`. Validators
/// must be pure: they see the record by shared reference and are shared across
/// concurrent runs. A panic inside a validator is not caught.
pub trait RecordCheck: Send + Sync {
    /// Inspect the record.
    fn check(&self, record: &Record) -> Result<(), RecordFailure>;
}

impl<F> RecordCheck for F
where
    F: Fn(&Record) -> Result<(), RecordFailure> + Send + Sync,
{
    #[inline]
    fn check(&self, record: &Record) -> Result<(), RecordFailure> {
        self(record)
    }
}

/// Field rules plus record-level validators.
#[derive(Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, FieldRule>,
    validators: Vec<Arc<dyn RecordCheck>>,
}

impl Schema {
    /// A schema with no fields and no validators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from `(name, rule)` pairs.
    ///
    /// ```
    /// use fieldwise::{FieldRule, Schema};
    ///
    /// let schema = Schema::from_fields([
    ///     ("status", FieldRule::choice(["active", "inactive"]).required()),
    ///     ("website", FieldRule::url()),
    /// ]);
    /// assert_eq!(schema.len(), 2);
    /// ```
    pub fn from_fields<I, N>(fields: I) -> Self
    where
        I: IntoIterator<Item = (N, FieldRule)>,
        N: Into<String>,
    {
        fields.into_iter().collect()
    }

    /// Add (or replace) the rule for `name`.
    ///
    /// Replacing keeps the field's original position.
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.insert(name.into(), rule);
        self
    }

    /// Append a record-level validator.
    pub fn validator<C: RecordCheck + 'static>(mut self, check: C) -> Self {
        self.validators.push(Arc::new(check));
        self
    }

    /// The rule configured for `name`.
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    /// Configured field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of configured fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` when no field is configured.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of record-level validators.
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Run a single configured field against `record`.
    ///
    /// Returns `None` if `name` is not part of the schema.
    pub fn validate_field(&self, name: &str, record: &Record) -> Option<Validation<(), FieldError>> {
        self.fields
            .get(name)
            .map(|rule| rule.validate(record.get(name)))
    }

    /// Validate `record` against every field rule and record-level validator.
    ///
    /// Returns `Ok(Validation::Success(()))` when nothing failed and
    /// `Ok(Validation::Failure(report))` otherwise. `Err` is reserved for a
    /// validator that returned [`RecordFailure::Fatal`].
    pub fn validate(&self, record: &Record) -> Result<Outcome, ValidatorFault> {
        let mut report = ErrorReport::new();

        for (name, rule) in &self.fields {
            if let Validation::Failure(error) = rule.validate(record.get(name)) {
                #[cfg(feature = "tracing")]
                tracing::debug!(field = %name, kind = ?error.kind(), "field check failed: {}", error);
                report.add_field_error(name.as_str(), error.to_string());
            }
        }

        for (index, validator) in self.validators.iter().enumerate() {
            match validator.check(record) {
                Ok(()) => {}
                Err(RecordFailure::Field { field, message }) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(field = %field, validator = index, "record check failed: {}", message);
                    report.add_field_error(field, message);
                }
                Err(RecordFailure::NonField(message)) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(validator = index, "record check failed: {}", message);
                    report.add_non_field_error(message);
                }
                Err(RecordFailure::Fatal(source)) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(validator = index, "record validator faulted: {}", source);
                    return Err(ValidatorFault::new(index, source));
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            fields = self.fields.len(),
            failed_keys = report.len(),
            messages = report.message_count(),
            "validation run finished"
        );

        Ok(report.into_validation())
    }
}

impl<N: Into<String>> FromIterator<(N, FieldRule)> for Schema {
    fn from_iter<I: IntoIterator<Item = (N, FieldRule)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(name, rule)| (name.into(), rule))
            .collect();
        Schema {
            fields,
            validators: Vec::new(),
        }
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.fields)
            .field("validators", &self.validators.len())
            .finish()
    }
}

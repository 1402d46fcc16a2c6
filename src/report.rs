//! Error report
//!
//! An [`ErrorReport`] collects every failure of one validation run, keyed by
//! field name or by [`NON_FIELD_ERRORS`] for failures that concern the record
//! as a whole. Keys keep the order in which they first received a message, and
//! messages keep the order in which they were added. Duplicates are kept.
//!
//! With the `serde` feature the report serializes as a plain object of arrays:
//!
//! ```text
//! {"name": ["must contain letters only"], "age": ["age must be >= 18"]}
//! ```

use crate::{Semigroup, Validation};
use indexmap::IndexMap;
use std::fmt;

/// Key under which record-level failures are filed.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Per-field error messages from one validation run.
///
/// # Examples
///
/// ```
/// use fieldwise::{ErrorReport, Validation, NON_FIELD_ERRORS};
///
/// let mut report = ErrorReport::new();
/// report.add_field_error("age", "field is required");
/// report.add_non_field_error("end date before start date");
///
/// assert_eq!(report.get("age"), Some(&["field is required".to_string()][..]));
/// assert_eq!(report.fields().collect::<Vec<_>>(), vec!["age", NON_FIELD_ERRORS]);
///
/// // An empty report becomes the valid-signal.
/// assert_eq!(ErrorReport::new().into_validation(), Validation::Success(()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorReport {
    entries: IndexMap<String, Vec<String>>,
}

impl ErrorReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to `field`'s list.
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Append `message` under [`NON_FIELD_ERRORS`].
    pub fn add_non_field_error(&mut self, message: impl Into<String>) {
        self.add_field_error(NON_FIELD_ERRORS, message);
    }

    /// Messages filed under `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries.get(field).map(Vec::as_slice)
    }

    /// Messages filed under [`NON_FIELD_ERRORS`].
    pub fn non_field_errors(&self) -> Option<&[String]> {
        self.get(NON_FIELD_ERRORS)
    }

    /// Whether `field` has at least one message.
    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// `true` when no key has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of messages across all keys.
    pub fn message_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Keys in first-insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, messages)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Consume the report and return the underlying map.
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.entries
    }

    /// The valid-signal if nothing was recorded, otherwise a failure carrying
    /// this report.
    pub fn into_validation(self) -> Validation<(), ErrorReport> {
        if self.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(self)
        }
    }
}

/// Merge key by key: lists for the same key are concatenated, new keys are
/// appended after existing ones.
impl Semigroup for ErrorReport {
    fn combine(mut self, other: Self) -> Self {
        for (field, messages) in other.entries {
            let slot = self.entries.entry(field).or_default();
            let merged = std::mem::take(slot).combine(messages);
            *slot = merged;
        }
        self
    }
}

impl IntoIterator for ErrorReport {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorReport {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut report = ErrorReport::new();
        for (field, message) in iter {
            report.add_field_error(field, message);
        }
        report
    }
}

/// One line per key: `field: first; second`.
impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, messages)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, messages.join("; "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}

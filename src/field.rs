//! Field rules
//!
//! A [`FieldRule`] validates the value found under one field name. It combines
//! a built-in kind check ([`FieldKind`]), a `required` flag, and an ordered list
//! of custom [`Hook`]s.
//!
//! Evaluation of a single field:
//!
//! 1. Absent or `Null`: `Required` if the rule is required, otherwise success
//!    with nothing else run.
//! 2. The kind check: representation first (`TypeMismatch`), then the kind's
//!    constraints (length, choices, format).
//! 3. Hooks, in attachment order.
//!
//! The first failure wins; a field never yields more than one error per run.
//!
//! # Examples
//!
//! ```
//! use fieldwise::{ErrorKind, FieldRule, Value};
//!
//! let tags = FieldRule::sequence().min_length(1).max_length(3);
//!
//! assert!(tags.validate(Some(&Value::from(vec![1]))).is_success());
//!
//! let err = tags.validate(Some(&Value::from(vec![1, 2, 3, 4])));
//! assert_eq!(err.error().map(|e| e.kind()), Some(ErrorKind::Length));
//! ```

use crate::error::FieldError;
use crate::hook::Hook;
use crate::value::{Value, ValueKind};
use crate::Validation;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};
use url::Url;

/// Date layout used by [`FieldRule::date`].
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}$").expect("email pattern compiles")
});

/// The built-in check a [`FieldRule`] performs.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A string, optionally bounded in characters.
    Text {
        /// Minimum number of characters.
        min_length: Option<usize>,
        /// Maximum number of characters.
        max_length: Option<usize>,
    },
    /// A whole number: `Int`, or a `Float` with no fractional part.
    Integer,
    /// Any number.
    Float,
    /// A boolean. A non-boolean is only rejected when the field is required.
    Boolean,
    /// One of a fixed set of values, compared structurally.
    Choice {
        /// The permitted values.
        choices: Vec<Value>,
    },
    /// A string parseable as a calendar date with a chrono layout.
    Date {
        /// chrono `strftime` layout.
        format: String,
    },
    /// A string shaped like an email address.
    Email,
    /// An absolute `http` or `https` URL with a host.
    Url,
    /// An array, optionally bounded in element count.
    Sequence {
        /// Minimum number of elements.
        min_length: Option<usize>,
        /// Maximum number of elements.
        max_length: Option<usize>,
    },
}

impl FieldKind {
    fn check(&self, value: &Value, required: bool) -> Result<(), FieldError> {
        match self {
            FieldKind::Text {
                min_length,
                max_length,
            } => check_text(value, required, *min_length, *max_length),
            FieldKind::Integer => match value.as_i64() {
                Some(_) => Ok(()),
                None => Err(mismatch(ValueKind::Integer)),
            },
            FieldKind::Float => match value.as_f64() {
                Some(_) => Ok(()),
                None => Err(mismatch(ValueKind::Float)),
            },
            FieldKind::Boolean => match value {
                Value::Bool(_) => Ok(()),
                _ if required => Err(mismatch(ValueKind::Boolean)),
                _ => Ok(()),
            },
            FieldKind::Choice { choices } => {
                if choices.iter().any(|choice| choice == value) {
                    Ok(())
                } else {
                    Err(FieldError::Choice {
                        choices: choices.clone(),
                    })
                }
            }
            FieldKind::Date { format } => check_date(value, format),
            FieldKind::Email => check_email(value, required),
            FieldKind::Url => check_url(value),
            FieldKind::Sequence {
                min_length,
                max_length,
            } => {
                let items = value.as_array().ok_or_else(|| mismatch(ValueKind::List))?;
                check_bounds(items.len(), *min_length, *max_length)
            }
        }
    }
}

fn mismatch(expected: ValueKind) -> FieldError {
    FieldError::TypeMismatch { expected }
}

fn check_bounds(len: usize, min: Option<usize>, max: Option<usize>) -> Result<(), FieldError> {
    if let Some(min) = min.filter(|&min| len < min) {
        return Err(FieldError::TooShort { min, actual: len });
    }
    if let Some(max) = max.filter(|&max| len > max) {
        return Err(FieldError::TooLong { max, actual: len });
    }
    Ok(())
}

fn check_text(
    value: &Value,
    required: bool,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), FieldError> {
    let s = value.as_str().ok_or_else(|| mismatch(ValueKind::String))?;
    if required && s.is_empty() {
        return Err(FieldError::Required);
    }
    check_bounds(s.chars().count(), min, max)
}

fn check_date(value: &Value, format: &str) -> Result<(), FieldError> {
    let s = value.as_str().ok_or_else(|| mismatch(ValueKind::String))?;
    // chrono tolerates unpadded fields, leading spaces and a signed year;
    // rendering back pins the input to the exact layout.
    match NaiveDate::parse_from_str(s, format) {
        Ok(date) if date.format(format).to_string() == s => Ok(()),
        _ => Err(FieldError::format(format!(
            "value must match format {}",
            describe_layout(format)
        ))),
    }
}

fn check_email(value: &Value, required: bool) -> Result<(), FieldError> {
    let s = value.as_str().ok_or_else(|| mismatch(ValueKind::String))?;
    if s.is_empty() {
        return if required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }
    if EMAIL_PATTERN.is_match(s) {
        Ok(())
    } else {
        Err(FieldError::format("invalid email"))
    }
}

fn check_url(value: &Value) -> Result<(), FieldError> {
    let s = value.as_str().ok_or_else(|| mismatch(ValueKind::String))?;
    if s.trim() != s || s.chars().any(char::is_control) {
        return Err(FieldError::format("value must be a valid URL"));
    }
    let url = Url::parse(s).map_err(|_| FieldError::format("value must be a valid URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FieldError::format("URL scheme must be http or https"));
    }
    // The parser supplies a host for `http:example.com`; insist on a written authority.
    let has_authority = s
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));
    if !has_authority || url.host_str().is_none_or(str::is_empty) {
        return Err(FieldError::format("URL must have a valid host"));
    }
    Ok(())
}

/// Render a chrono layout the way people write it, e.g. `%Y-%m-%d` as `YYYY-MM-DD`.
fn describe_layout(format: &str) -> String {
    [
        ("%Y", "YYYY"),
        ("%m", "MM"),
        ("%d", "DD"),
        ("%H", "hh"),
        ("%M", "mm"),
        ("%S", "ss"),
    ]
    .iter()
    .fold(format.to_string(), |acc, (token, human)| acc.replace(token, human))
}

/// A validation rule for a single field.
///
/// Rules are built once, with consuming builder methods, and then shared by
/// every validation run. There is no way to mutate a rule through a shared
/// reference, so attaching hooks after the rule is in use requires building a
/// new rule.
///
/// # Examples
///
/// ```
/// use fieldwise::{FieldError, FieldRule, Value};
///
/// let status = FieldRule::choice(["active", "inactive", "pending"]).required();
///
/// assert!(status.validate(Some(&Value::from("active"))).is_success());
/// assert!(matches!(
///     status.validate(Some(&Value::from("blocked"))).error(),
///     Some(FieldError::Choice { .. })
/// ));
/// assert_eq!(status.validate(None).error(), Some(&FieldError::Required));
/// ```
#[derive(Clone)]
pub struct FieldRule {
    kind: FieldKind,
    required: bool,
    hooks: Vec<Arc<dyn Hook>>,
}

impl FieldRule {
    /// An optional rule of the given kind with no hooks.
    pub fn new(kind: FieldKind) -> Self {
        FieldRule {
            kind,
            required: false,
            hooks: Vec::new(),
        }
    }

    /// A string field.
    pub fn text() -> Self {
        Self::new(FieldKind::Text {
            min_length: None,
            max_length: None,
        })
    }

    /// A whole-number field.
    pub fn integer() -> Self {
        Self::new(FieldKind::Integer)
    }

    /// A numeric field.
    pub fn float() -> Self {
        Self::new(FieldKind::Float)
    }

    /// A boolean field.
    pub fn boolean() -> Self {
        Self::new(FieldKind::Boolean)
    }

    /// A field restricted to `choices`.
    pub fn choice<I>(choices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::new(FieldKind::Choice {
            choices: choices.into_iter().map(Into::into).collect(),
        })
    }

    /// A date field in [`DEFAULT_DATE_FORMAT`].
    pub fn date() -> Self {
        Self::date_with_format(DEFAULT_DATE_FORMAT)
    }

    /// A date field in a custom chrono layout.
    ///
    /// The layout must name a full calendar date (year, month and day). A
    /// time-only layout such as `%H:%M` cannot produce a date, so every value
    /// fails against it. Input must match the layout exactly, including
    /// zero padding.
    ///
    /// ```
    /// use fieldwise::{FieldRule, Value};
    ///
    /// let rule = FieldRule::date_with_format("%d/%m/%Y");
    /// assert!(rule.validate(Some(&Value::from("29/11/2025"))).is_success());
    /// assert!(rule.validate(Some(&Value::from("2025-11-29"))).is_failure());
    /// ```
    pub fn date_with_format(format: impl Into<String>) -> Self {
        Self::new(FieldKind::Date {
            format: format.into(),
        })
    }

    /// An email field.
    pub fn email() -> Self {
        Self::new(FieldKind::Email)
    }

    /// An http(s) URL field.
    pub fn url() -> Self {
        Self::new(FieldKind::Url)
    }

    /// An array field.
    pub fn sequence() -> Self {
        Self::new(FieldKind::Sequence {
            min_length: None,
            max_length: None,
        })
    }

    /// Mark the field as mandatory.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as optional (the default).
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the minimum length of a text or sequence field; `0` removes the bound.
    ///
    /// Other kinds have no length and are returned unchanged.
    pub fn min_length(mut self, min: usize) -> Self {
        if let FieldKind::Text { min_length, .. } | FieldKind::Sequence { min_length, .. } =
            &mut self.kind
        {
            *min_length = (min > 0).then_some(min);
        }
        self
    }

    /// Set the maximum length of a text or sequence field; `0` removes the bound.
    ///
    /// Other kinds have no length and are returned unchanged.
    pub fn max_length(mut self, max: usize) -> Self {
        if let FieldKind::Text { max_length, .. } | FieldKind::Sequence { max_length, .. } =
            &mut self.kind
        {
            *max_length = (max > 0).then_some(max);
        }
        self
    }

    /// Append a custom hook. Hooks run in the order they were added.
    pub fn with_hook<H: Hook + 'static>(mut self, hook: H) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// The built-in kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Whether an absent value is an error.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Number of attached hooks.
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Validate `value`; `None` means the key was missing from the record.
    pub fn validate(&self, value: Option<&Value>) -> Validation<(), FieldError> {
        let value = match value {
            None | Some(Value::Null) if self.required => {
                return Validation::failure(FieldError::Required)
            }
            None | Some(Value::Null) => return Validation::success(()),
            Some(value) => value,
        };

        Validation::from_result(self.kind.check(value, self.required))
            .and_then(|()| self.run_hooks(value))
    }

    fn run_hooks(&self, value: &Value) -> Validation<(), FieldError> {
        self.hooks
            .iter()
            .find_map(|hook| hook.check(value).err())
            .map_or(Validation::success(()), |message| {
                Validation::failure(FieldError::Custom(message))
            })
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

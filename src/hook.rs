//! Custom validator hooks
//!
//! A hook is an extra check attached to a [`FieldRule`](crate::FieldRule). It
//! only runs after the rule's built-in check has passed, and the first hook
//! that fails supplies the field's error message.
//!
//! Hooks see the raw [`Value`]. A hook that is handed a representation it does
//! not understand must pass: type errors belong to the built-in check. The
//! adapters in this module ([`text`], [`integer`], [`float`]) follow that rule
//! for you.
//!
//! # Examples
//!
//! ```
//! use fieldwise::{hook, predicate::*, FieldRule, Value};
//!
//! let name = FieldRule::text()
//!     .required()
//!     .max_length(20)
//!     .with_hook(hook::letters_only());
//!
//! assert!(name.validate(Some(&Value::from("Krishna"))).is_success());
//! assert!(name.validate(Some(&Value::from("Krishna123"))).is_failure());
//!
//! // Any closure over `&Value` works as well.
//! let even = FieldRule::integer().with_hook(|v: &Value| match v.as_i64() {
//!     Some(n) if n % 2 != 0 => Err("must be even".to_string()),
//!     _ => Ok(()),
//! });
//! assert!(even.validate(Some(&Value::from(3))).is_failure());
//! ```

use crate::predicate::{is_alphabetic, AllChars, Predicate};
use crate::value::Value;
use std::fmt;

/// A user-supplied check attached to a field rule.
///
/// Returning `Err(message)` fails the field with that message. Hooks are shared
/// across concurrent validation runs, hence `Send + Sync`.
pub trait Hook: Send + Sync {
    /// Inspect `value` and either accept it or explain why not.
    fn check(&self, value: &Value) -> Result<(), String>;
}

impl<F> Hook for F
where
    F: Fn(&Value) -> Result<(), String> + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> Result<(), String> {
        self(value)
    }
}

/// Hook that applies a string predicate to string values.
///
/// Created by [`text`].
pub struct OnText<P> {
    predicate: P,
    message: String,
}

impl<P: Predicate<str>> Hook for OnText<P> {
    fn check(&self, value: &Value) -> Result<(), String> {
        match value.as_str() {
            Some(s) if !self.predicate.check(s) => Err(self.message.clone()),
            _ => Ok(()),
        }
    }
}

impl<P> fmt::Debug for OnText<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnText")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Lift a string predicate into a hook that fails with `message`.
///
/// Non-string values pass untouched.
pub fn text<P: Predicate<str>>(predicate: P, message: impl Into<String>) -> OnText<P> {
    OnText {
        predicate,
        message: message.into(),
    }
}

/// Hook that applies an integer predicate to whole-number values.
///
/// Created by [`integer`].
pub struct OnInteger<P> {
    predicate: P,
    message: String,
}

impl<P: Predicate<i64>> Hook for OnInteger<P> {
    fn check(&self, value: &Value) -> Result<(), String> {
        match value.as_i64() {
            Some(n) if !self.predicate.check(&n) => Err(self.message.clone()),
            _ => Ok(()),
        }
    }
}

impl<P> fmt::Debug for OnInteger<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnInteger")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Lift an `i64` predicate into a hook that fails with `message`.
///
/// Applies to `Int` values and to floats with no fractional part; everything
/// else passes.
///
/// ```
/// use fieldwise::{hook, predicate::*, FieldRule, Value};
///
/// let age = FieldRule::integer().with_hook(hook::integer(between(0, 150), "age out of range"));
/// assert!(age.validate(Some(&Value::from(200))).is_failure());
/// assert!(age.validate(Some(&Value::from(40.0))).is_success());
/// ```
pub fn integer<P: Predicate<i64>>(predicate: P, message: impl Into<String>) -> OnInteger<P> {
    OnInteger {
        predicate,
        message: message.into(),
    }
}

/// Hook that applies a float predicate to numeric values.
///
/// Created by [`float`].
pub struct OnFloat<P> {
    predicate: P,
    message: String,
}

impl<P: Predicate<f64>> Hook for OnFloat<P> {
    fn check(&self, value: &Value) -> Result<(), String> {
        match value.as_f64() {
            Some(x) if !self.predicate.check(&x) => Err(self.message.clone()),
            _ => Ok(()),
        }
    }
}

impl<P> fmt::Debug for OnFloat<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnFloat")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Lift an `f64` predicate into a hook that fails with `message`.
///
/// Applies to integers and floats; everything else passes.
pub fn float<P: Predicate<f64>>(predicate: P, message: impl Into<String>) -> OnFloat<P> {
    OnFloat {
        predicate,
        message: message.into(),
    }
}

/// Strings must consist of alphabetic characters only.
pub fn letters_only() -> OnText<AllChars<fn(char) -> bool>> {
    text(is_alphabetic(), "must contain letters only")
}

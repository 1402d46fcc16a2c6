//! Validation outcome type
//!
//! Every check in fieldwise reports through [`Validation`]: a single field rule
//! produces a `Validation<(), FieldError>`, and a full record run produces a
//! `Validation<(), ErrorReport>`. `Validation::Success(())` is the explicit
//! valid-signal; a failure always carries a non-empty error value.
//!
//! # Examples
//!
//! ```
//! use fieldwise::Validation;
//!
//! let ok = Validation::<_, Vec<&str>>::success(42);
//! let bad = Validation::<i32, _>::failure(vec!["field is required"]);
//!
//! assert!(ok.is_success());
//! assert!(bad.is_failure());
//! ```
//!
//! ## Accumulating errors
//!
//! ```
//! use fieldwise::Validation;
//!
//! let v1 = Validation::<i32, _>::failure(vec!["name: too long"]);
//! let v2 = Validation::<i32, _>::failure(vec!["age: required"]);
//!
//! assert_eq!(
//!     v1.and(v2),
//!     Validation::Failure(vec!["name: too long", "age: required"])
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with an error
///
/// Unlike `Result`, combining two failed validations with [`Validation::and`]
/// keeps both errors, merged through the error type's [`Semigroup`] instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldwise::Validation;
    ///
    /// let v = Validation::from_result(Err::<(), _>("invalid email".to_string()));
    /// assert_eq!(v, Validation::Failure("invalid email".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Borrow the error, if this validation failed
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldwise::Validation;
    ///
    /// let v = Validation::<(), _>::failure("max length exceeded");
    /// assert_eq!(v.error(), Some(&"max length exceeded"));
    /// ```
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldwise::Validation;
    ///
    /// let v = Validation::<(), _>::failure("invalid email");
    /// assert_eq!(v.map_err(str::len), Validation::Failure(13));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function only runs if this validation succeeded, so the first
    /// failure wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldwise::Validation;
    ///
    /// let v = Validation::<_, &str>::success("Krishna123").and_then(|name| {
    ///     if name.chars().all(char::is_alphabetic) {
    ///         Validation::success(name)
    ///     } else {
    ///         Validation::failure("must contain letters only")
    ///     }
    /// });
    /// assert_eq!(v, Validation::Failure("must contain letters only"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

//! Number predicates

use super::combinators::Predicate;

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Value is strictly greater than `threshold`.
pub fn gt<T: PartialOrd + Send + Sync>(threshold: T) -> Gt<T> {
    Gt(threshold)
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Value is at least `threshold`.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// assert!(ge(18_i64).check(&18));
/// assert!(!ge(18_i64).check(&17));
/// ```
pub fn ge<T: PartialOrd + Send + Sync>(threshold: T) -> Ge<T> {
    Ge(threshold)
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// Value is strictly less than `threshold`.
pub fn lt<T: PartialOrd + Send + Sync>(threshold: T) -> Lt<T> {
    Lt(threshold)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Value is at most `threshold`.
pub fn le<T: PartialOrd + Send + Sync>(threshold: T) -> Le<T> {
    Le(threshold)
}

/// Predicate for an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Value lies in `min..=max`.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let p = between(0.0, 1.0);
/// assert!(p.check(&0.5));
/// assert!(!p.check(&1.5));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Value is strictly greater than zero.
pub fn positive<T: PartialOrd + Default + Send + Sync>() -> Gt<T> {
    Gt(T::default())
}

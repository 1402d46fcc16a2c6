//! Semigroup trait for merging validation output
//!
//! A Semigroup is a type with an associative binary operation. Fieldwise uses it
//! wherever two pieces of validation output meet: message lists are concatenated
//! and [`ErrorReport`](crate::ErrorReport)s are merged key by key.
//!
//! # Examples
//!
//! ```
//! use fieldwise::Semigroup;
//!
//! let first = vec!["field is required".to_string()];
//! let second = vec!["age must be >= 18".to_string()];
//! assert_eq!(
//!     first.combine(second),
//!     vec!["field is required".to_string(), "age must be >= 18".to_string()]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes both operands by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup_keeps_order() {
        let v1 = vec!["a", "b"];
        let v2 = vec!["c"];
        assert_eq!(v1.combine(v2), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_vec_semigroup_keeps_duplicates() {
        let v1 = vec!["same"];
        let v2 = vec!["same"];
        assert_eq!(v1.combine(v2), vec!["same", "same"]);
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec![1, 2];
        let b = vec![3];
        let c = vec![4, 5];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}

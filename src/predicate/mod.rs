//! Composable predicates for custom hooks
//!
//! Built-in field kinds cover representation and shape. Anything more specific
//! (letters only, a numeric range, a required prefix) is expressed as a
//! predicate and lifted into a field hook with [`hook::text`](crate::hook::text),
//! [`hook::integer`](crate::hook::integer) or [`hook::float`](crate::hook::float).
//!
//! # Example
//!
//! ```rust
//! use fieldwise::predicate::*;
//!
//! let username = len_between(3, 20).and(all_chars(|c: char| c.is_alphanumeric() || c == '_'));
//! assert!(username.check("john_doe"));
//! assert!(!username.check("ab"));
//! assert!(!username.check("invalid-name"));
//!
//! let adult = ge(18_i64).and(le(150));
//! assert!(adult.check(&30));
//! assert!(!adult.check(&17));
//! ```

mod combinators;
mod number;
mod string;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use string::{
    all_chars, contains, ends_with, is_alphabetic, is_alphanumeric, len_between, len_max, len_min,
    not_empty, starts_with, AllChars, Contains, EndsWith, LenBetween, NotEmpty, StartsWith,
};

pub use number::{between, ge, gt, le, lt, positive, Between, Ge, Gt, Le, Lt};

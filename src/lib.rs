//! # Fieldwise
//!
//! Declarative validation for untyped, already-decoded records.
//!
//! Describe the shape you expect as a [`Schema`]: a mapping from field name to
//! [`FieldRule`], plus optional record-level validators for cross-field checks.
//! Hand it a [`Record`] (typically a decoded JSON object) and get back either
//! the valid-signal, `Validation::Success(())`, or an [`ErrorReport`] listing
//! messages per field.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldwise::{hook, record, FieldRule, Record, RecordFailure, Schema, Validation};
//!
//! let users = Schema::new()
//!     .field("name", FieldRule::text().required().max_length(20).with_hook(hook::letters_only()))
//!     .field("age", FieldRule::integer().required())
//!     .field("email", FieldRule::email().required())
//!     .field("is_active", FieldRule::boolean())
//!     .validator(|r: &Record| match r.get("age").and_then(|v| v.as_i64()) {
//!         Some(age) if age < 18 => Err(RecordFailure::field("age", "age must be >= 18")),
//!         _ => Ok(()),
//!     });
//!
//! let input = record! {
//!     "name" => "Krishna123",
//!     "age" => 17,
//!     "email" => "krish@example.com",
//!     "is_active" => true,
//! };
//!
//! match users.validate(&input).expect("validators do not fault") {
//!     Validation::Success(()) => println!("valid"),
//!     Validation::Failure(report) => {
//!         assert_eq!(report.fields().collect::<Vec<_>>(), vec!["name", "age"]);
//!         println!("{}", report);
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Value`] and [`ErrorReport`], so a
//!   JSON body decodes straight into a [`Record`] and a report encodes as
//!   `{"field": ["message", ...]}`.
//! - `tracing`: debug events for every failed check and a summary per run.
//! - `proptest`: an `Arbitrary` implementation for [`Value`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod field;
pub mod hook;
pub mod predicate;
pub mod report;
pub mod schema;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod value;

// Re-exports
pub use error::{ErrorKind, FieldError, RecordFailure, ValidatorFault};
pub use field::{FieldKind, FieldRule, DEFAULT_DATE_FORMAT};
pub use hook::Hook;
pub use report::{ErrorReport, NON_FIELD_ERRORS};
pub use schema::{Outcome, RecordCheck, Schema};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use value::{Record, Value, ValueKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ErrorKind, FieldError, RecordFailure, ValidatorFault};
    pub use crate::field::{FieldKind, FieldRule};
    pub use crate::hook::{self, Hook};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::report::{ErrorReport, NON_FIELD_ERRORS};
    pub use crate::schema::{Outcome, RecordCheck, Schema};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::value::{Record, Value, ValueKind};
    pub use crate::record;
}

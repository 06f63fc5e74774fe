//! Form-field validation for Sun Parakeet inputs.
//!
//! A field declares an ordered list of [`Rule`]s; [`validate`] returns the
//! first error message or `None` when the value passes.

pub mod rule;
pub mod validation;
pub mod value;

pub use rule::{Rule, Validator};
pub use validation::{
    validate, validate_sparse, validate_sparse_with, validate_with, ValidationMessages,
};
pub use value::{FieldValue, RequiredViolation};

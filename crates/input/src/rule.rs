//! Validation rules.

use std::fmt;
use std::sync::Arc;

/// A custom check attached to a [`Rule`].
///
/// Returns the error message, or `None` when the value passes. Implemented
/// for every `Fn(&Rule<T>, &T) -> Option<String>`.
pub trait Validator<T: ?Sized>: Send + Sync {
    fn validate(&self, rule: &Rule<T>, value: &T) -> Option<String>;
}

impl<T, F> Validator<T> for F
where
    T: ?Sized,
    F: Fn(&Rule<T>, &T) -> Option<String> + Send + Sync,
{
    fn validate(&self, rule: &Rule<T>, value: &T) -> Option<String> {
        self(rule, value)
    }
}

/// One validation constraint on a field of type `T`.
///
/// ```
/// use parakeet_input::{validate, Rule};
///
/// let rules = [
///     Rule::new().required().message("Name is required"),
///     Rule::new().validator(|_: &Rule<str>, value: &str| {
///         (value.chars().count() > 8).then(|| "At most 8 characters".to_string())
///     }),
/// ];
///
/// assert_eq!(validate(&rules, "  "), Some("Name is required".to_string()));
/// assert_eq!(validate(&rules, "Parakeets"), Some("At most 8 characters".to_string()));
/// assert_eq!(validate(&rules, "Parakeet"), None);
/// ```
pub struct Rule<T: ?Sized> {
    /// Message used when this rule fails its required-check
    pub message: Option<String>,
    pub required: bool,
    pub validator: Option<Arc<dyn Validator<T>>>,
}

impl<T: ?Sized> Rule<T> {
    /// A rule with no constraints; it always passes.
    pub fn new() -> Self {
        Self {
            message: None,
            required: false,
            validator: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach a closure as the custom check.
    pub fn validator<F>(mut self, check: F) -> Self
    where
        F: Fn(&Rule<T>, &T) -> Option<String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(check));
        self
    }

    /// Attach any [`Validator`] implementation as the custom check.
    pub fn with_validator(mut self, validator: Arc<dyn Validator<T>>) -> Self {
        self.validator = Some(validator);
        self
    }
}

impl<T: ?Sized> Default for Rule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            required: self.required,
            validator: self.validator.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .field("required", &self.required)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

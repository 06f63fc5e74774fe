//! The validation pipeline.
//!
//! Rules run in declaration order. Each rule runs a fixed sequence of
//! stages (required-check, then the custom validator); the first non-empty
//! message from any stage ends the whole run.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::rule::Rule;
use crate::value::{FieldValue, RequiredViolation};

/// Messages used when a required rule fails without its own message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub required: String,
    pub invalid_number: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            required: "必填".to_string(),
            invalid_number: "请输入有效数字".to_string(),
        }
    }
}

impl ValidationMessages {
    fn for_violation(&self, violation: RequiredViolation) -> &str {
        match violation {
            RequiredViolation::Missing => &self.required,
            RequiredViolation::InvalidNumber => &self.invalid_number,
        }
    }
}

static DEFAULT_MESSAGES: LazyLock<ValidationMessages> = LazyLock::new(ValidationMessages::default);

#[derive(Debug, Clone, Copy)]
enum Stage {
    Required,
    Validator,
}

const PIPELINE: [Stage; 2] = [Stage::Required, Stage::Validator];

impl Stage {
    fn name(self) -> &'static str {
        match self {
            Stage::Required => "required",
            Stage::Validator => "validator",
        }
    }

    fn check<T: FieldValue + ?Sized>(
        self,
        rule: &Rule<T>,
        value: &T,
        messages: &ValidationMessages,
    ) -> Option<String> {
        match self {
            Stage::Required => required_check(rule, value, messages),
            Stage::Validator => rule
                .validator
                .as_ref()
                .and_then(|validator| validator.validate(rule, value)),
        }
    }
}

fn required_check<T: FieldValue + ?Sized>(
    rule: &Rule<T>,
    value: &T,
    messages: &ValidationMessages,
) -> Option<String> {
    if !rule.required {
        return None;
    }

    let violation = value.required_violation()?;
    let message = match rule.message.as_deref() {
        Some(message) if !message.is_empty() => message,
        _ => messages.for_violation(violation),
    };
    Some(message.to_string())
}

fn run<'a, T, I>(rules: I, value: &T, messages: &ValidationMessages) -> Option<String>
where
    T: FieldValue + ?Sized + 'a,
    I: IntoIterator<Item = Option<&'a Rule<T>>>,
{
    for (index, rule) in rules.into_iter().enumerate() {
        // An empty slot ends the run as a pass.
        let rule = rule?;

        for stage in PIPELINE {
            let error = stage
                .check(rule, value, messages)
                .filter(|message| !message.is_empty());
            if let Some(error) = error {
                tracing::trace!(rule = index, stage = stage.name(), %error, "Validation failed");
                return Some(error);
            }
        }
    }
    None
}

/// First error produced by `rules` for `value`, or `None` if all pass.
pub fn validate<T: FieldValue + ?Sized>(rules: &[Rule<T>], value: &T) -> Option<String> {
    validate_with(&DEFAULT_MESSAGES, rules, value)
}

/// [`validate`] with caller-supplied default messages.
pub fn validate_with<T: FieldValue + ?Sized>(
    messages: &ValidationMessages,
    rules: &[Rule<T>],
    value: &T,
) -> Option<String> {
    run(rules.iter().map(Some), value, messages)
}

/// Validates against a rule list with holes.
///
/// Evaluation stops at the first `None` slot and the value passes, even if
/// later rules would have failed.
pub fn validate_sparse<T: FieldValue + ?Sized>(
    rules: &[Option<Rule<T>>],
    value: &T,
) -> Option<String> {
    validate_sparse_with(&DEFAULT_MESSAGES, rules, value)
}

/// [`validate_sparse`] with caller-supplied default messages.
pub fn validate_sparse_with<T: FieldValue + ?Sized>(
    messages: &ValidationMessages,
    rules: &[Option<Rule<T>>],
    value: &T,
) -> Option<String> {
    run(rules.iter().map(Option::as_ref), value, messages)
}

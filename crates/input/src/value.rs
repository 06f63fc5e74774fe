//! How field values answer the required-check.

/// Why a value fails a required rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredViolation {
    /// Absent, blank text or an empty list
    Missing,
    /// A number that is NaN
    InvalidNumber,
}

/// A value a form field can hold.
pub trait FieldValue {
    /// `None` when the value satisfies a required rule.
    fn required_violation(&self) -> Option<RequiredViolation>;
}

impl FieldValue for str {
    fn required_violation(&self) -> Option<RequiredViolation> {
        self.trim().is_empty().then_some(RequiredViolation::Missing)
    }
}

impl FieldValue for String {
    fn required_violation(&self) -> Option<RequiredViolation> {
        self.as_str().required_violation()
    }
}

impl FieldValue for f64 {
    fn required_violation(&self) -> Option<RequiredViolation> {
        self.is_nan().then_some(RequiredViolation::InvalidNumber)
    }
}

impl FieldValue for f32 {
    fn required_violation(&self) -> Option<RequiredViolation> {
        self.is_nan().then_some(RequiredViolation::InvalidNumber)
    }
}

macro_rules! always_satisfied {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn required_violation(&self) -> Option<RequiredViolation> {
                    None
                }
            }
        )*
    };
}

always_satisfied!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T> FieldValue for [T] {
    fn required_violation(&self) -> Option<RequiredViolation> {
        self.is_empty().then_some(RequiredViolation::Missing)
    }
}

impl<T> FieldValue for Vec<T> {
    fn required_violation(&self) -> Option<RequiredViolation> {
        self.as_slice().required_violation()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn required_violation(&self) -> Option<RequiredViolation> {
        match self {
            Some(value) => value.required_violation(),
            None => Some(RequiredViolation::Missing),
        }
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn required_violation(&self) -> Option<RequiredViolation> {
        (**self).required_violation()
    }
}

impl FieldValue for serde_json::Value {
    fn required_violation(&self) -> Option<RequiredViolation> {
        match self {
            serde_json::Value::Null => Some(RequiredViolation::Missing),
            serde_json::Value::String(s) => s.required_violation(),
            serde_json::Value::Array(items) => items.required_violation(),
            _ => None,
        }
    }
}

//! Presence checks, delays and identifiers.

use rand::Rng;

/// Values that can be "empty" in the form-field sense.
///
/// Only absence, the empty string and NaN count as empty. Zero, `false` and
/// empty collections are present values.
pub trait NonEmpty {
    fn is_non_empty(&self) -> bool;
}

impl NonEmpty for str {
    fn is_non_empty(&self) -> bool {
        !self.is_empty()
    }
}

impl NonEmpty for String {
    fn is_non_empty(&self) -> bool {
        !self.is_empty()
    }
}

impl NonEmpty for f64 {
    fn is_non_empty(&self) -> bool {
        !self.is_nan()
    }
}

impl NonEmpty for f32 {
    fn is_non_empty(&self) -> bool {
        !self.is_nan()
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NonEmpty for $ty {
                fn is_non_empty(&self) -> bool {
                    true
                }
            }
        )*
    };
}

always_present!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T> NonEmpty for Vec<T> {
    fn is_non_empty(&self) -> bool {
        true
    }
}

impl<T> NonEmpty for [T] {
    fn is_non_empty(&self) -> bool {
        true
    }
}

impl<T: NonEmpty> NonEmpty for Option<T> {
    fn is_non_empty(&self) -> bool {
        self.as_ref().is_some_and(NonEmpty::is_non_empty)
    }
}

impl<T: NonEmpty + ?Sized> NonEmpty for &T {
    fn is_non_empty(&self) -> bool {
        (**self).is_non_empty()
    }
}

impl NonEmpty for serde_json::Value {
    fn is_non_empty(&self) -> bool {
        match self {
            serde_json::Value::Null => false,
            serde_json::Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }
}

/// Returns false for `None`, JSON `null`, `""` and NaN, true for everything else.
///
/// # Examples
///
/// ```
/// use parakeet_common::is_non_empty;
///
/// assert!(is_non_empty(&0));
/// assert!(is_non_empty(&false));
/// assert!(!is_non_empty(""));
/// assert!(!is_non_empty(&f64::NAN));
/// assert!(!is_non_empty(&None::<i32>));
/// ```
pub fn is_non_empty<T: NonEmpty + ?Sized>(value: &T) -> bool {
    value.is_non_empty()
}

/// Suspends the calling task for about `milliseconds`.
///
/// Natively this sleeps on the current tokio runtime and resolves at once
/// when there is none, or when that runtime was built without timers. In the
/// browser it waits on `setTimeout`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn delay(milliseconds: u64) {
    if tokio::runtime::Handle::try_current().is_err() {
        tracing::trace!(milliseconds, "No tokio runtime, delay resolves immediately");
        return;
    }
    // tokio panics while constructing `Sleep` when the time driver is disabled.
    let duration = std::time::Duration::from_millis(milliseconds);
    match std::panic::catch_unwind(|| tokio::time::sleep(duration)) {
        Ok(sleep) => sleep.await,
        Err(_) => {
            tracing::trace!(milliseconds, "Runtime has no timers, delay resolves immediately");
        }
    }
}

/// Suspends the calling task for about `milliseconds`.
#[cfg(target_arch = "wasm32")]
pub async fn delay(milliseconds: u64) {
    let milliseconds = u32::try_from(milliseconds).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(milliseconds).await;
}

/// Random version 4 UUID, lowercase and hyphenated.
///
/// Meant for element ids and list keys; not for secrets.
pub fn generate_uuid() -> String {
    generate_uuid_with(&mut rand::thread_rng())
}

/// [`generate_uuid`] drawing from a caller-supplied generator.
pub fn generate_uuid_with<R: Rng>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.gen();
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

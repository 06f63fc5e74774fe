//! Test doubles for the outbound ports
//!
//! These live in the adapters layer next to the real implementations so
//! that every crate's tests can share them.

mod recording_toast;

pub use recording_toast::{RecordingToast, ToastCall};

//! Adapter implementations
//!
//! - `platform`: host environment detection, selected per target
//! - `tracing_toast`: a toast port that only logs, for headless hosts
//! - `testing`: recording doubles for unit tests

pub mod platform;
pub mod testing;
pub mod tracing_toast;

pub use platform::create_host;
pub use tracing_toast::TracingToast;

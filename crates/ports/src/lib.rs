//! Port definitions and the data types that cross them.
//!
//! This is the innermost crate of the workspace. It names what the
//! utilities need from the outside world (a toast renderer and a view of
//! the hosting environment) without depending on any implementation.

pub mod outbound;
pub mod toast_types;

// Re-export toast types at crate root for convenience
pub use toast_types::{HistoryBackCallback, IconOption, ToastOption};

pub use outbound::{HostEnvironment, ToastPort};

#[cfg(any(test, feature = "testing"))]
pub use outbound::{MockHostEnvironment, MockToastPort};

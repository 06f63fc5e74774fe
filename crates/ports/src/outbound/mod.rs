//! Outbound ports - Interfaces for external collaborators
//!
//! Adapters implement these traits; the feedback and platform helpers
//! only ever see the trait objects.

pub mod host_environment;
pub mod toast_port;

pub use host_environment::HostEnvironment;
pub use toast_port::ToastPort;

#[cfg(any(test, feature = "testing"))]
pub use host_environment::MockHostEnvironment;
#[cfg(any(test, feature = "testing"))]
pub use toast_port::MockToastPort;

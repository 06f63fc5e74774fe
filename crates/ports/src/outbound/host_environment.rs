//! Host Environment Port - what the code is running inside
//!
//! Browser hosts expose a user agent. Everything else (desktop shells,
//! server-side rendering, unit tests) reports `is_browser() == false`, and
//! the helpers that depend on a browser degrade to no-ops.

/// Port for host environment detection
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait HostEnvironment: Send + Sync {
    /// Whether the code runs in a browser-like host
    fn is_browser(&self) -> bool;

    /// The host's user-agent string, if it has one
    fn user_agent(&self) -> Option<String>;
}

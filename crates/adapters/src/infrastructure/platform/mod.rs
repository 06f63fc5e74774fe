//! Platform-specific host environments
//!
//! The browser host is selected on wasm32. Native builds get the desktop
//! host, which is not a browser unless it emulates one.

#[cfg(target_arch = "wasm32")]
mod wasm;

mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::BrowserHost;

pub use desktop::{DesktopHost, USER_AGENT_ENV};

use std::sync::Arc;

use parakeet_ports::HostEnvironment;

/// Host environment for the current target
#[cfg(target_arch = "wasm32")]
pub fn create_host() -> Arc<dyn HostEnvironment> {
    Arc::new(BrowserHost)
}

/// Host environment for the current target
#[cfg(not(target_arch = "wasm32"))]
pub fn create_host() -> Arc<dyn HostEnvironment> {
    Arc::new(DesktopHost::from_env())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_host_follows_the_environment() {
        let expected = std::env::var(USER_AGENT_ENV).is_ok_and(|ua| !ua.trim().is_empty());
        assert_eq!(create_host().is_browser(), expected);
    }
}

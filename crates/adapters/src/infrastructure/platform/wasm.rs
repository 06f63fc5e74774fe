//! Browser host backed by `window.navigator`.

use parakeet_ports::HostEnvironment;

/// The page's own browser environment
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl HostEnvironment for BrowserHost {
    fn is_browser(&self) -> bool {
        web_sys::window().is_some()
    }

    fn user_agent(&self) -> Option<String> {
        match web_sys::window()?.navigator().user_agent() {
            Ok(user_agent) => Some(user_agent),
            Err(e) => {
                tracing::warn!("Failed to read user agent: {:?}", e);
                None
            }
        }
    }
}

//! Desktop host
//!
//! Desktop shells and tests have no browser. A user agent can still be
//! supplied to emulate one, e.g. when rendering a mobile preview.

use parakeet_ports::HostEnvironment;

/// Environment variable read by [`DesktopHost::from_env`]
pub const USER_AGENT_ENV: &str = "PARAKEET_USER_AGENT";

/// Native host; a browser only when it emulates a user agent
#[derive(Clone, Debug, Default)]
pub struct DesktopHost {
    user_agent: Option<String>,
}

impl DesktopHost {
    /// A host without a browser
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that behaves like a browser reporting `user_agent`
    pub fn emulating(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
        }
    }

    /// Emulate the user agent in `PARAKEET_USER_AGENT`, if set and not blank
    pub fn from_env() -> Self {
        Self::from_user_agent(std::env::var(USER_AGENT_ENV).ok())
    }

    fn from_user_agent(user_agent: Option<String>) -> Self {
        let user_agent = user_agent.filter(|ua| !ua.trim().is_empty());
        match &user_agent {
            Some(ua) => tracing::debug!(user_agent = %ua, "Desktop host emulating a browser"),
            None => tracing::debug!("Desktop host without browser"),
        }
        Self { user_agent }
    }
}

impl HostEnvironment for DesktopHost {
    fn is_browser(&self) -> bool {
        self.user_agent.is_some()
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }
}

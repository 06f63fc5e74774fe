//! Toast DTOs exchanged through `ToastPort`
//!
//! These types are owned by the ports layer. Renderers map them onto
//! whatever component model they use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Callback invoked when the user navigates back while a toast is open
pub type HistoryBackCallback = Arc<dyn Fn() + Send + Sync>;

/// Icon descriptor: a named icon from the icon set, or literal SVG markup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

impl IconOption {
    /// A named icon from the icon set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// An icon rendered from literal SVG markup
    pub fn svg(markup: impl Into<String>) -> Self {
        Self {
            svg: Some(markup.into()),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Everything a renderer needs to show or update a toast
#[derive(Clone, Default)]
pub struct ToastOption {
    /// Identity of the toast; at most one toast per key is displayed
    pub key: String,
    pub text: Option<String>,
    pub icon: Option<IconOption>,
    /// Auto-dismiss delay in milliseconds; 0 keeps the toast open
    pub duration: u32,
    /// Cover the page with a backdrop that swallows input
    pub mask: bool,
    /// Keep the toast open across in-app navigation
    pub keep: bool,
    pub on_history_back: Option<HistoryBackCallback>,
}

impl ToastOption {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Invoke the history-back callback, if any
    pub fn history_back(&self) {
        if let Some(callback) = &self.on_history_back {
            callback();
        }
    }
}

impl fmt::Debug for ToastOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastOption")
            .field("key", &self.key)
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("duration", &self.duration)
            .field("mask", &self.mask)
            .field("keep", &self.keep)
            .field("on_history_back", &self.on_history_back.is_some())
            .finish()
    }
}

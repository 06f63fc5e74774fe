//! Loading toast configuration.

use serde::{Deserialize, Serialize};

/// Appearance and identity of the loading toast.
///
/// Every field has a default, so partial configuration files deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Toast key; must not collide with other toasts
    pub key: String,
    /// Pixel size of the default and named icons
    pub icon_size: u32,
    /// CSS class applied to the default and named icons
    pub icon_class: String,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            key: "__sun_parakeet_loading__".to_string(),
            icon_size: 32,
            icon_class: "sunp-loading__icon".to_string(),
        }
    }
}

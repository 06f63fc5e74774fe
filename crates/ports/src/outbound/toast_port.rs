//! Toast Port - the notification renderer
//!
//! Toasts are addressed by `ToastOption::key`. A renderer keeps at most one
//! toast per key.

use async_trait::async_trait;

use crate::toast_types::ToastOption;

/// Port for the toast display component
///
/// `show_toast` may complete asynchronously (enter animation, mount);
/// callers that need the toast on screen must await it.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ToastPort: Send + Sync {
    /// Create and display a toast keyed by `option.key`
    async fn show_toast(&self, option: ToastOption);

    /// Dismiss the toast for `key`; no-op if none is shown
    fn hide_toast(&self, key: &str);

    /// Update an already displayed toast in place, without replaying the
    /// show animation
    fn modify_toast(&self, option: ToastOption);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn mock_toast_port_is_usable_as_trait_object() {
        let mut toast = MockToastPort::new();
        toast
            .expect_show_toast()
            .withf(|option| option.key == "k" && option.duration == 0)
            .times(1)
            .returning(|_| ());
        toast
            .expect_hide_toast()
            .withf(|key| key == "k")
            .times(1)
            .return_const(());

        let port: Arc<dyn ToastPort> = Arc::new(toast);
        port.show_toast(ToastOption::new("k")).await;
        port.hide_toast("k");
    }
}

//! Toast port that writes to the log instead of the screen.
//!
//! Used where no renderer is mounted (desktop shells, server-side
//! rendering) so that feedback calls still leave a trace.

use async_trait::async_trait;
use parakeet_ports::{ToastOption, ToastPort};

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingToast;

#[async_trait]
impl ToastPort for TracingToast {
    async fn show_toast(&self, option: ToastOption) {
        tracing::info!(
            key = %option.key,
            text = option.text.as_deref().unwrap_or_default(),
            duration = option.duration,
            mask = option.mask,
            "Toast shown"
        );
    }

    fn hide_toast(&self, key: &str) {
        tracing::info!(key, "Toast hidden");
    }

    fn modify_toast(&self, option: ToastOption) {
        tracing::info!(
            key = %option.key,
            text = option.text.as_deref().unwrap_or_default(),
            "Toast updated"
        );
    }
}

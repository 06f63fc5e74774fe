//! Reference-counted loading toast.
//!
//! Every caller that needs the loading indicator takes a session with
//! [`LoadingController::show_loading`] (or [`LoadingController::acquire`])
//! and gives it back with [`LoadingController::hide_loading`]. The toast is
//! created when the first session starts, updated in place while others are
//! running, and hidden when the last one ends. A forced hide drops every
//! session at once, e.g. when the user navigates away.
//!
//! Outside a browser host every call is a no-op.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use parakeet_ports::{HistoryBackCallback, HostEnvironment, IconOption, ToastOption, ToastPort};

use crate::config::LoadingConfig;

/// Built-in spinner shown when no icon is requested.
pub const LOADING_ICON_SVG: &str = include_str!("../assets/loading.svg");

/// Callback invoked with the original option when the user navigates back
pub type LoadingHistoryBack = Arc<dyn Fn(&ShowLoadingOption) + Send + Sync>;

/// Icon override for the loading toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingIcon {
    /// Icon from the icon set, sized and styled like the default icon
    Named(String),
    /// Caller-supplied descriptor, used unchanged
    Custom(IconOption),
}

impl From<IconOption> for LoadingIcon {
    fn from(icon: IconOption) -> Self {
        LoadingIcon::Custom(icon)
    }
}

/// What to show in the loading toast
///
/// The toast always intercepts history back while loading.
/// `on_history_back` is called with this option when set.
#[derive(Clone, Default)]
pub struct ShowLoadingOption {
    pub icon: Option<LoadingIcon>,
    pub text: Option<String>,
    pub on_history_back: Option<LoadingHistoryBack>,
}

impl ShowLoadingOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<LoadingIcon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_named(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(LoadingIcon::Named(name.into()));
        self
    }

    pub fn on_history_back<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ShowLoadingOption) + Send + Sync + 'static,
    {
        self.on_history_back = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for ShowLoadingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowLoadingOption")
            .field("icon", &self.icon)
            .field("text", &self.text)
            .field("on_history_back", &self.on_history_back.is_some())
            .finish()
    }
}

/// What the toast renderer has to do after a session starts
enum ToastAction {
    Show(ToastOption),
    Modify(ToastOption),
}

/// Owns the session count and drives the toast port at count transitions.
pub struct LoadingController {
    toast: Arc<dyn ToastPort>,
    host: Arc<dyn HostEnvironment>,
    config: LoadingConfig,
    counter: AtomicI64,
}

impl LoadingController {
    pub fn new(toast: Arc<dyn ToastPort>, host: Arc<dyn HostEnvironment>) -> Self {
        Self::with_config(toast, host, LoadingConfig::default())
    }

    pub fn with_config(
        toast: Arc<dyn ToastPort>,
        host: Arc<dyn HostEnvironment>,
        config: LoadingConfig,
    ) -> Self {
        Self {
            toast,
            host,
            config,
            counter: AtomicI64::new(0),
        }
    }

    pub fn config(&self) -> &LoadingConfig {
        &self.config
    }

    /// Number of open sessions
    pub fn counter(&self) -> i64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Whether the loading toast should currently be visible
    pub fn is_active(&self) -> bool {
        self.counter() > 0
    }

    /// Start a session and show (or refresh) the loading toast.
    ///
    /// The first session awaits the renderer's show; later sessions update
    /// the visible toast in place. Pair every call with
    /// [`hide_loading`](Self::hide_loading), or use [`acquire`](Self::acquire).
    pub async fn show_loading(&self, option: ShowLoadingOption) {
        if let Some(action) = self.enter(&option) {
            self.apply(action).await;
        }
    }

    /// End a session, or every session when `force` is set.
    ///
    /// The toast is hidden once no session is left.
    pub fn hide_loading(&self, force: bool) {
        if !self.host.is_browser() {
            return;
        }

        let remaining = if force {
            self.counter.swap(0, Ordering::SeqCst);
            0
        } else {
            let previous = self.update_counter(|count| (count - 1).max(0));
            (previous - 1).max(0)
        };

        if remaining > 0 {
            tracing::trace!(key = %self.config.key, remaining, "Loading session ended");
            return;
        }

        tracing::debug!(key = %self.config.key, force, "Hiding loading toast");
        self.toast.hide_toast(&self.config.key);
    }

    /// Start a session that ends when the returned guard is dropped.
    ///
    /// The guard exists before the renderer is awaited, so cancelling this
    /// future does not leak a session.
    pub async fn acquire(&self, option: ShowLoadingOption) -> LoadingGuard<'_> {
        let action = self.enter(&option);
        let guard = LoadingGuard {
            controller: self,
            released: false,
        };
        if let Some(action) = action {
            self.apply(action).await;
        }
        guard
    }

    /// Same as [`hide_loading`](Self::hide_loading).
    pub fn release(&self, force: bool) {
        self.hide_loading(force);
    }

    /// Run `work` with the loading toast shown.
    ///
    /// The session ends when `work` completes, panics, or is dropped.
    pub async fn with_loading<F>(&self, option: ShowLoadingOption, work: F) -> F::Output
    where
        F: Future,
    {
        let _guard = self.acquire(option).await;
        work.await
    }

    /// Count the new session and decide what the renderer must do.
    fn enter(&self, option: &ShowLoadingOption) -> Option<ToastAction> {
        if !self.host.is_browser() {
            return None;
        }

        let previous = self.update_counter(|count| count.max(0) + 1);
        if previous < 0 {
            tracing::warn!(previous, "Loading counter was negative, clamped to 0");
        }
        let count = previous.max(0) + 1;

        let toast_option = self.toast_option(option);
        if count <= 1 {
            Some(ToastAction::Show(toast_option))
        } else {
            Some(ToastAction::Modify(toast_option))
        }
    }

    async fn apply(&self, action: ToastAction) {
        match action {
            ToastAction::Show(option) => {
                tracing::debug!(key = %option.key, "Showing loading toast");
                self.toast.show_toast(option).await;
            }
            ToastAction::Modify(option) => {
                tracing::debug!(key = %option.key, count = self.counter(), "Updating loading toast");
                self.toast.modify_toast(option);
            }
        }
    }

    /// Atomically replace the count, returning the previous value.
    fn update_counter(&self, f: impl Fn(i64) -> i64) -> i64 {
        match self
            .counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| Some(f(count)))
        {
            Ok(previous) | Err(previous) => previous,
        }
    }

    fn default_icon(&self) -> IconOption {
        IconOption::default()
            .with_size(self.config.icon_size)
            .with_class(self.config.icon_class.clone())
    }

    fn toast_option(&self, option: &ShowLoadingOption) -> ToastOption {
        let icon = match &option.icon {
            Some(LoadingIcon::Named(name)) => IconOption {
                name: Some(name.clone()),
                ..self.default_icon()
            },
            Some(LoadingIcon::Custom(icon)) => icon.clone(),
            None => IconOption {
                svg: Some(LOADING_ICON_SVG.to_string()),
                ..self.default_icon()
            },
        };

        // Always set, so history back is intercepted while loading.
        let original = option.clone();
        let on_history_back: HistoryBackCallback = Arc::new(move || {
            if let Some(callback) = &original.on_history_back {
                callback(&original);
            }
        });

        ToastOption {
            key: self.config.key.clone(),
            text: option.text.clone(),
            icon: Some(icon),
            duration: 0,
            mask: true,
            keep: true,
            on_history_back: Some(on_history_back),
        }
    }
}

/// One loading session; ends on drop.
#[must_use = "dropping the guard ends the loading session immediately"]
pub struct LoadingGuard<'a> {
    controller: &'a LoadingController,
    released: bool,
}

impl LoadingGuard<'_> {
    /// End the session now.
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if !self.released {
            self.released = true;
            self.controller.hide_loading(false);
        }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.release_once();
    }
}

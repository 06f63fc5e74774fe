//! Recording `ToastPort` for tests.
//!
//! Keeps every call in order so tests can assert on the exact sequence the
//! code under test produced.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use parakeet_ports::{ToastOption, ToastPort};

/// One call received by [`RecordingToast`]
#[derive(Debug, Clone)]
pub enum ToastCall {
    Show(ToastOption),
    Modify(ToastOption),
    Hide(String),
}

impl ToastCall {
    /// Key the call was addressed to
    pub fn key(&self) -> String {
        match self {
            ToastCall::Show(option) | ToastCall::Modify(option) => option.key.clone(),
            ToastCall::Hide(key) => key.clone(),
        }
    }
}

/// `ToastPort` that records calls and renders nothing.
#[derive(Debug, Default)]
pub struct RecordingToast {
    calls: Mutex<Vec<ToastCall>>,
}

impl RecordingToast {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ToastCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every call so far, oldest first
    pub fn calls(&self) -> Vec<ToastCall> {
        self.lock().clone()
    }

    pub fn show_count(&self) -> usize {
        self.count(|call| matches!(call, ToastCall::Show(_)))
    }

    pub fn modify_count(&self) -> usize {
        self.count(|call| matches!(call, ToastCall::Modify(_)))
    }

    pub fn hide_count(&self) -> usize {
        self.count(|call| matches!(call, ToastCall::Hide(_)))
    }

    /// Option of the most recent show or modify call
    pub fn last_option(&self) -> Option<ToastOption> {
        self.lock().iter().rev().find_map(|call| match call {
            ToastCall::Show(option) | ToastCall::Modify(option) => Some(option.clone()),
            ToastCall::Hide(_) => None,
        })
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn count(&self, predicate: impl Fn(&ToastCall) -> bool) -> usize {
        self.lock().iter().filter(|call| predicate(call)).count()
    }
}

#[async_trait]
impl ToastPort for RecordingToast {
    async fn show_toast(&self, option: ToastOption) {
        self.lock().push(ToastCall::Show(option));
    }

    fn hide_toast(&self, key: &str) {
        self.lock().push(ToastCall::Hide(key.to_string()));
    }

    fn modify_toast(&self, option: ToastOption) {
        self.lock().push(ToastCall::Modify(option));
    }
}

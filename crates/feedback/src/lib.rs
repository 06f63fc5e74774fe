//! User feedback helpers for Sun Parakeet.
//!
//! [`LoadingController`] keeps one loading toast on screen for as long as
//! any caller still needs it.

pub mod config;
pub mod loading;

pub use config::LoadingConfig;
pub use loading::{
    LoadingController, LoadingGuard, LoadingHistoryBack, LoadingIcon, ShowLoadingOption,
    LOADING_ICON_SVG,
};

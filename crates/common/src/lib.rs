//! Common utility functions for the Sun Parakeet component library.
//!
//! # Design Principles
//!
//! - **Pure functions first** - date and presence helpers have no side effects
//! - **Host access through ports** - platform sniffing reads the user agent
//!   from a [`parakeet_ports::HostEnvironment`], never from globals
//! - **WASM compatible** - all code must work in both native and WASM targets

pub mod datetime;
pub mod error;
pub mod platform;
pub mod presence;

// Re-export commonly used items at crate root for convenience
pub use datetime::{DateField, DatePrecision};
pub use error::DateError;
pub use platform::{is_ios, is_wechat_dev_tools};
pub use presence::{delay, generate_uuid, generate_uuid_with, is_non_empty, NonEmpty};

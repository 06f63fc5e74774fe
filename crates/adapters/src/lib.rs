//! Infrastructure adapters for the Sun Parakeet ports.

pub mod infrastructure;

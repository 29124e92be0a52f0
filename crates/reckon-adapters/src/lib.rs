//! Infrastructure adapters for Reckon.
//!
//! This crate implements the ports defined in `reckon-core::application::ports`.

pub mod history;
pub mod observer;

// Re-export commonly used adapters
pub use history::InMemoryHistory;
pub use observer::TracingObserver;

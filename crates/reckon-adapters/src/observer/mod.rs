//! History observer adapters.

pub mod logging;

pub use logging::TracingObserver;

//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `reckon-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `HistoryStore`: Calculation history storage
//!   - `HistoryObserver`: Notification of history changes
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The REPL in the CLI layer drives `Calculator` directly)

pub mod output;

pub use output::{HistoryObserver, HistoryStore};

#[cfg(test)]
pub use output::{MockHistoryObserver, MockHistoryStore};

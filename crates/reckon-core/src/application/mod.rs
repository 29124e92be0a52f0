//! Application layer for Reckon.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`Calculator`)
//! - **Ports**: Interface definitions (traits) for history storage and observers
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! arithmetic itself. All arithmetic lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::Calculator;

// Re-export port traits (for adapter implementation)
pub use ports::{HistoryObserver, HistoryStore};

pub use error::ApplicationError;

//! Core domain layer for Reckon.
//!
//! Pure arithmetic and value types. No I/O, no storage, no subscribers:
//! the only side effect is emitting tracing events.
//!
//! - **Immutable values**: `Operation` and `Calculation` are `Copy`
//! - **Closed dispatch**: operations are an enum, not a trait hierarchy
pub mod calculation;
pub mod error;
pub mod format;
pub mod operation;

pub use calculation::Calculation;
pub use error::{DomainError, ErrorCategory};
pub use format::format_number;
pub use operation::{Operation, parse_operand};

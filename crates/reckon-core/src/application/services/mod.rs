//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "perform an operation and record it".

pub mod calculator;

pub use calculator::Calculator;

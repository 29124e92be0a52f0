//! Reckon Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Reckon
//! calculator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        reckon-cli (REPL, eval)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │              (Calculator)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (HistoryStore, HistoryObserver)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    reckon-adapters (Infrastructure)     │
//! │  (InMemoryHistory, TracingObserver)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │        (Operation, Calculation)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reckon_core::prelude::*;
//!
//! let calculator = Calculator::new(store); // impl HistoryStore
//! let op: Operation = "add".parse()?;
//! assert_eq!(calculator.perform_operation(op, 5.0, 3.0)?, 8.0);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Calculator,
        ports::{HistoryObserver, HistoryStore},
    };
    pub use crate::domain::{Calculation, Operation, format_number, parse_operand};
    pub use crate::error::{CalcError, CalcResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

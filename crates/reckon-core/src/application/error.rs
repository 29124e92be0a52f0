//! Application layer errors.
//!
//! These errors represent failures in orchestration, not arithmetic.
//! Arithmetic and input errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while coordinating history and observers.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// History store access failed (lock poisoned).
    #[error("Calculation history is unavailable")]
    HistoryUnavailable,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::HistoryUnavailable => vec![
                "The calculation history could not be accessed".into(),
                "Restart the calculator to start with a fresh history".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HistoryUnavailable => ErrorCategory::Internal,
        }
    }
}

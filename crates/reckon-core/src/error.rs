//! Unified error handling for Reckon Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Reckon Core operations.
#[derive(Debug, Error, Clone)]
pub enum CalcError {
    /// Errors from the domain layer (bad input, arithmetic failures).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (history bookkeeping).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CalcError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Arithmetic => ErrorCategory::Arithmetic,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The domain error, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Application(_) => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Arithmetic,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type CalcResult<T> = Result<T, CalcError>;

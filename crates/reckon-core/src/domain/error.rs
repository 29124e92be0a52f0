// ============================================================================
// domain/error.rs - ARITHMETIC & INPUT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the REPL logs and prints the same error)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Both inputs must be numbers (got {operand1}, {operand2})")]
    NonNumericInput { operand1: f64, operand2: f64 },

    #[error("'{raw}' is not a number")]
    InvalidOperand { raw: String },

    // ========================================================================
    // Arithmetic Errors
    // ========================================================================
    #[error("Division by zero is not allowed ({dividend} / 0)")]
    DivisionByZero { dividend: f64 },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown operation '{name}'")]
    UnknownOperation { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NonNumericInput { .. } | Self::InvalidOperand { .. } => vec![
                "Operands must be plain decimal numbers, e.g. 5, -3.2, 1e3".into(),
            ],
            Self::DivisionByZero { .. } => vec!["Use a non-zero divisor".into()],
            Self::UnknownOperation { name } => vec![
                format!("'{}' is not an operation", name),
                "Available operations: add, subtract, multiply, divide".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NonNumericInput { .. } | Self::InvalidOperand { .. } => {
                ErrorCategory::Validation
            }
            Self::DivisionByZero { .. } => ErrorCategory::Arithmetic,
            Self::UnknownOperation { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Arithmetic,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_is_arithmetic() {
        let err = DomainError::DivisionByZero { dividend: 5.0 };
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert!(err.to_string().contains("Division by zero"));
    }

    #[test]
    fn unknown_operation_lists_available() {
        let err = DomainError::UnknownOperation {
            name: "modulo".into(),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("divide")));
    }
}

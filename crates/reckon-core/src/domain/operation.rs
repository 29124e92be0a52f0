//! Arithmetic operations.
//!
//! # Design
//!
//! `Operation` is a closed set of variants. Every variant goes through the
//! same three steps in [`Operation::calculate`]:
//!
//! 1. [`Operation::validate`] rejects non-numeric (NaN) operands
//! 2. [`Operation::execute`] computes the variant-specific result
//! 3. the result is logged
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and extend `ALL`
//! 2. Add the `verb`, `name` and `execute` arms
//! 3. Add the verb to `FromStr`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::error::DomainError;
use crate::domain::format::format_number;

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Every operation, in help-text order.
    pub const ALL: [Operation; 4] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
    ];

    /// The command verb that selects this operation (`add`, `divide`, ...).
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Addition => "add",
            Self::Subtraction => "subtract",
            Self::Multiplication => "multiply",
            Self::Division => "divide",
        }
    }

    /// Lowercase noun used when rendering a calculation.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
        }
    }

    /// Reject operands that are not numbers.
    pub fn validate(&self, a: f64, b: f64) -> Result<(), DomainError> {
        if a.is_nan() || b.is_nan() {
            error!(
                "Invalid input: {}, {} (Inputs must be numbers)",
                format_number(a),
                format_number(b)
            );
            return Err(DomainError::NonNumericInput {
                operand1: a,
                operand2: b,
            });
        }
        Ok(())
    }

    /// Apply the operation without validation or logging of the result.
    pub fn execute(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        match self {
            Self::Addition => Ok(a + b),
            Self::Subtraction => Ok(a - b),
            Self::Multiplication => Ok(a * b),
            Self::Division => {
                if b == 0.0 {
                    error!("Attempted to divide by zero.");
                    return Err(DomainError::DivisionByZero { dividend: a });
                }
                Ok(a / b)
            }
        }
    }

    /// Validate, execute and log.
    pub fn calculate(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        self.validate(a, b)?;
        let result = self.execute(a, b)?;
        info!(
            operation = self.name(),
            "Operation performed: {} and {} -> Result: {}",
            format_number(a),
            format_number(b),
            format_number(result)
        );
        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        tracing::debug!("Creating operation for: {s}");
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Addition),
            "subtract" => Ok(Self::Subtraction),
            "multiply" => Ok(Self::Multiplication),
            "divide" => Ok(Self::Division),
            _ => Err(DomainError::UnknownOperation { name: s.to_owned() }),
        }
    }
}

/// Parse a single operand.
///
/// Accepts anything `f64::from_str` accepts, so `nan` parses and is then
/// rejected by [`Operation::validate`].
pub fn parse_operand(raw: &str) -> Result<f64, DomainError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| DomainError::InvalidOperand {
            raw: raw.to_owned(),
        })
}

//! A recorded calculation.

use std::fmt;

use serde::Serialize;

use crate::domain::format::format_number;
use crate::domain::operation::Operation;

/// One successful calculation as it appears in history.
///
/// Immutable once built: fields are private and only readable through
/// accessors. The result is captured at construction time so rendering never
/// has to re-run the operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    operation: Operation,
    operand1: f64,
    operand2: f64,
    result: f64,
}

impl Calculation {
    pub fn new(operation: Operation, operand1: f64, operand2: f64, result: f64) -> Self {
        Self {
            operation,
            operand1,
            operand2,
            result,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operand1(&self) -> f64 {
        self.operand1
    }

    pub fn operand2(&self) -> f64 {
        self.operand2
    }

    pub fn result(&self) -> f64 {
        self.result
    }
}

impl fmt::Display for Calculation {
    /// `5.0 addition 3.0 = 8.0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.operand1),
            self.operation,
            format_number(self.operand2),
            format_number(self.result)
        )
    }
}

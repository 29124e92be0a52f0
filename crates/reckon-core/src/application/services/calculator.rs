//! Calculator Service - main application orchestrator.
//!
//! This service coordinates one calculation:
//! 1. Validate and execute the operation
//! 2. Record the calculation in history
//! 3. Notify observers
//!
//! A failed operation stops at step 1: history and observers are untouched.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{HistoryObserver, HistoryStore},
    domain::{Calculation, Operation},
    error::CalcResult,
};

/// Calculator with an ordered calculation history.
///
/// Build one per process and pass it to whatever drives it. The history
/// lives in the injected [`HistoryStore`], so calculators built over handles
/// to the same store share one history.
pub struct Calculator {
    history: Box<dyn HistoryStore>,
    observers: Vec<Box<dyn HistoryObserver>>,
}

impl Calculator {
    /// Create a calculator over the given history store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use reckon_core::application::Calculator;
    /// use reckon_core::domain::Operation;
    ///
    /// let calculator = Calculator::new(store); // impl HistoryStore
    /// let sum = calculator.perform_operation(Operation::Addition, 5.0, 3.0)?;
    /// ```
    pub fn new(history: Box<dyn HistoryStore>) -> Self {
        Self {
            history,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of history changes.
    pub fn add_observer(&mut self, observer: Box<dyn HistoryObserver>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer added");
    }

    /// Perform `operation` on `a` and `b`, record it and return the result.
    ///
    /// Errors from the operation propagate unchanged and leave history as it
    /// was.
    #[instrument(skip(self, operation), fields(operation = %operation))]
    pub fn perform_operation(&self, operation: Operation, a: f64, b: f64) -> CalcResult<f64> {
        let result = operation.calculate(a, b)?;

        let calculation = Calculation::new(operation, a, b, result);
        self.history.append(calculation)?;
        debug!("Performed operation: {calculation}");

        for observer in &self.observers {
            observer.on_recorded(&calculation);
        }

        Ok(result)
    }

    /// All recorded calculations, oldest first.
    pub fn history(&self) -> CalcResult<Vec<Calculation>> {
        self.history.list()
    }

    /// Number of recorded calculations.
    pub fn history_len(&self) -> CalcResult<usize> {
        self.history.len()
    }

    /// The most recent calculation, if any.
    pub fn last(&self) -> CalcResult<Option<Calculation>> {
        self.history.last()
    }

    /// Forget every recorded calculation.
    pub fn clear_history(&self) -> CalcResult<()> {
        self.history.clear()?;
        info!("History cleared.");

        for observer in &self.observers {
            observer.on_cleared();
        }

        Ok(())
    }
}

//! Command handlers, one module per subcommand.

use reckon_adapters::{InMemoryHistory, TracingObserver};
use reckon_core::application::Calculator;

pub mod completions;
pub mod config;
pub mod eval;
pub mod repl;

/// Wire the calculator the binary uses: in-memory history, observed by the
/// tracing log.
pub fn build_calculator() -> Calculator {
    let mut calculator = Calculator::new(Box::new(InMemoryHistory::new()));
    calculator.add_observer(Box::new(TracingObserver));
    calculator
}

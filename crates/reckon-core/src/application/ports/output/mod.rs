//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the calculator needs from the outside world.
//! The `reckon-adapters` crate provides implementations.

use crate::domain::Calculation;
use crate::error::CalcResult;

/// Port for calculation history storage.
///
/// Implemented by:
/// - `reckon_adapters::history::InMemoryHistory` (production and testing)
///
/// ## Design Notes
///
/// - Insertion order is significant: `list` returns calculations in the
///   order they were appended
/// - Implementations are handles; sharing a store between calculators
///   shares its history
#[cfg_attr(test, mockall::automock)]
pub trait HistoryStore: Send + Sync {
    /// Append a calculation to the end of the history.
    fn append(&self, calculation: Calculation) -> CalcResult<()>;

    /// All calculations, oldest first.
    fn list(&self) -> CalcResult<Vec<Calculation>>;

    /// Remove every calculation.
    fn clear(&self) -> CalcResult<()>;

    /// Number of stored calculations.
    fn len(&self) -> CalcResult<usize>;

    /// The most recent calculation.
    fn last(&self) -> CalcResult<Option<Calculation>>;
}

/// Port notified whenever the history changes.
///
/// Implemented by:
/// - `reckon_adapters::observer::TracingObserver` (logs every change)
#[cfg_attr(test, mockall::automock)]
pub trait HistoryObserver: Send + Sync {
    /// Called after a calculation has been appended to history.
    fn on_recorded(&self, calculation: &Calculation);

    /// Called after the history has been cleared.
    fn on_cleared(&self) {}
}

//! In-memory calculation history.

use std::sync::{Arc, RwLock};

use reckon_core::{
    application::{ApplicationError, ports::HistoryStore},
    domain::Calculation,
    error::CalcResult,
};

/// Thread-safe, insertion-ordered in-memory history.
///
/// Cloning yields another handle to the same list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    inner: Arc<RwLock<Vec<Calculation>>>,
}

impl InMemoryHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if history is empty.
    pub fn is_empty(&self) -> CalcResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(&self, calculation: Calculation) -> CalcResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::HistoryUnavailable)?;
        inner.push(calculation);
        Ok(())
    }

    fn list(&self) -> CalcResult<Vec<Calculation>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::HistoryUnavailable)?;
        Ok(inner.clone())
    }

    fn clear(&self) -> CalcResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::HistoryUnavailable)?;
        inner.clear();
        Ok(())
    }

    fn len(&self) -> CalcResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::HistoryUnavailable)?;
        Ok(inner.len())
    }

    fn last(&self) -> CalcResult<Option<Calculation>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::HistoryUnavailable)?;
        Ok(inner.last().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reckon_core::domain::Operation;

    fn calc(a: f64, b: f64) -> Calculation {
        Calculation::new(Operation::Addition, a, b, a + b)
    }

    #[test]
    fn append_preserves_order() {
        let history = InMemoryHistory::new();
        history.append(calc(1.0, 1.0)).unwrap();
        history.append(calc(2.0, 2.0)).unwrap();

        let all = history.list().unwrap();
        assert_eq!(all, vec![calc(1.0, 1.0), calc(2.0, 2.0)]);
        assert_eq!(history.last().unwrap(), Some(calc(2.0, 2.0)));
    }

    #[test]
    fn clear_empties_history() {
        let history = InMemoryHistory::new();
        history.append(calc(1.0, 1.0)).unwrap();
        assert!(!history.is_empty().unwrap());

        history.clear().unwrap();
        assert!(history.is_empty().unwrap());
        assert_eq!(history.len().unwrap(), 0);
        assert_eq!(history.last().unwrap(), None);
    }

    #[test]
    fn clones_share_state() {
        let a = InMemoryHistory::new();
        let b = a.clone();
        a.append(calc(3.0, 4.0)).unwrap();
        assert_eq!(b.len().unwrap(), 1);

        b.clear().unwrap();
        assert!(a.is_empty().unwrap());
    }

    #[test]
    fn poisoned_lock_reports_unavailable() {
        let history = InMemoryHistory::new();
        let handle = history.clone();
        let _ = std::thread::spawn(move || {
            let _guard = handle.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(history.append(calc(1.0, 2.0)).is_err());
        assert!(history.list().is_err());
        assert!(history.is_empty().is_err());
    }
}

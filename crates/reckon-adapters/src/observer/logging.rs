//! Observer that writes every history change to the tracing log.

use tracing::info;

use reckon_core::{application::ports::HistoryObserver, domain::Calculation};

/// Logs recorded calculations and history clears at INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl HistoryObserver for TracingObserver {
    fn on_recorded(&self, calculation: &Calculation) {
        info!(
            operation = %calculation.operation(),
            "Observer: New calculation added -> {calculation}"
        );
    }

    fn on_cleared(&self) {
        info!("Observer: History cleared");
    }
}

//! History storage adapters.

pub mod memory;

pub use memory::InMemoryHistory;

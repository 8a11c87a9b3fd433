use crate::modules::counters::core::counter::Counter;
use crate::modules::counters::core::errors::StoreError;

/// Owner of the name to value mapping. Implementations must be atomic per name:
/// concurrent increments never lose an update and concurrent creates of the same
/// name produce exactly one winner.
pub trait CounterStore: Send + Sync {
    fn create(&self, name: &str, value: u64) -> Result<Counter, StoreError>;

    /// Snapshot of every counter. Order is unspecified.
    fn get_all(&self) -> Vec<Counter>;

    fn get_one(&self, name: &str) -> Result<Counter, StoreError>;

    fn increment(&self, name: &str) -> Result<Counter, StoreError>;
}

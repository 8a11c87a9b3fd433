// In memory counter store.
//
// Purpose
// - Hold every counter for the lifetime of the process. Nothing is persisted.
//
// Responsibilities
// - Insert-if-absent on create, in-place increment, snapshot reads.
// - Keep per-name operations atomic through the map's shard locks.

use crate::modules::counters::adapters::outbound::counter_store::CounterStore;
use crate::modules::counters::core::counter::Counter;
use crate::modules::counters::core::errors::StoreError;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

#[derive(Default)]
pub struct InMemoryCounterStore {
    counters: DashMap<String, u64>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl CounterStore for InMemoryCounterStore {
    fn create(&self, name: &str, value: u64) -> Result<Counter, StoreError> {
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(_) => {
                tracing::warn!(counter = name, "counter already exists");
                Err(StoreError::Conflict(name.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
                tracing::info!(counter = name, value, "counter created");
                Ok(Counter::new(name, value))
            }
        }
    }

    fn get_all(&self) -> Vec<Counter> {
        self.counters
            .iter()
            .map(|entry| Counter::new(entry.key().clone(), *entry.value()))
            .collect()
    }

    fn get_one(&self, name: &str) -> Result<Counter, StoreError> {
        self.counters
            .get(name)
            .map(|value| Counter::new(name, *value))
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn increment(&self, name: &str) -> Result<Counter, StoreError> {
        let mut value = self
            .counters
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        *value = value.saturating_add(1);
        let counter = Counter::new(name, *value);
        drop(value);

        tracing::info!(counter = name, value = counter.value, "counter incremented");
        Ok(counter)
    }
}

use crate::modules::counters::adapters::outbound::counter_store::CounterStore;
use crate::modules::counters::adapters::outbound::counter_store_in_memory::InMemoryCounterStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub counters: Arc<dyn CounterStore>,
}

impl AppState {
    pub fn new(counters: Arc<dyn CounterStore>) -> Self {
        Self { counters }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCounterStore::new()))
    }
}

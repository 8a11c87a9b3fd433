use axum::{Json, extract::State};

use crate::modules::counters::core::counter::Counter;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<Vec<Counter>> {
    let counters = state.counters.get_all();
    tracing::debug!(count = counters.len(), "listing counters");
    Json(counters)
}

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::modules::counters::adapters::inbound::http_error::ApiError;
use crate::modules::counters::adapters::inbound::path::counter_name;
use crate::modules::counters::core::counter::Counter;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Counter>, ApiError> {
    let name = counter_name(path)?;
    Ok(Json(state.counters.increment(&name)?))
}

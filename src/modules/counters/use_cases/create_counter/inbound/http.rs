use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::modules::counters::adapters::inbound::http_error::ApiError;
use crate::modules::counters::core::counter::Counter;
use crate::modules::counters::use_cases::create_counter::command::{
    CreateCounter, CreateCounterBody,
};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateCounterBody>, JsonRejection>,
) -> Result<Json<Counter>, ApiError> {
    let Json(body) = body.inspect_err(|rejection| {
        tracing::warn!(%rejection, "rejected create counter body");
    })?;

    let command = CreateCounter::try_from(body).inspect_err(|err| {
        tracing::warn!(%err, "create counter failed validation");
    })?;

    let counter = state.counters.create(&command.name, command.value)?;
    Ok(Json(counter))
}

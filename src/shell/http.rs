use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::modules::counters::use_cases::create_counter::inbound::http as create_http;
use crate::modules::counters::use_cases::get_counter::inbound::http as get_http;
use crate::modules::counters::use_cases::increment_counter::inbound::http as increment_http;
use crate::modules::counters::use_cases::list_counters::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/counters",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/api/counters/{name}",
            get(get_http::handle).put(increment_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::extract::{Path, rejection::PathRejection};

use crate::modules::counters::adapters::inbound::http_error::ApiError;

pub const BLANK_NAME: &str = "name cannot be blank";

/// Extracts the `{name}` path segment, rejecting blank names before the store is consulted.
pub fn counter_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(name) = path.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    if name.trim().is_empty() {
        tracing::warn!("rejected blank counter name in path");
        return Err(ApiError::validation(&[BLANK_NAME]));
    }
    Ok(name)
}

use serde::Deserialize;

use crate::modules::counters::adapters::inbound::http_error::ApiError;
use crate::modules::counters::adapters::inbound::path::BLANK_NAME;

pub const NULL_NAME: &str = "name cannot be null";
pub const NEGATIVE_VALUE: &str = "counter value cannot be less than 0";

#[derive(Debug, Default, Deserialize)]
pub struct CreateCounterBody {
    pub name: Option<String>,
    pub value: Option<i64>,
}

/// A create request that passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCounter {
    pub name: String,
    pub value: u64,
}

impl TryFrom<CreateCounterBody> for CreateCounter {
    type Error = ApiError;

    fn try_from(body: CreateCounterBody) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();

        match body.name.as_deref() {
            None => violations.extend([NULL_NAME, BLANK_NAME]),
            Some(name) if name.trim().is_empty() => violations.push(BLANK_NAME),
            Some(_) => {}
        }

        // absent value defaults to zero
        let value = body.value.unwrap_or(0);
        if value < 0 {
            violations.push(NEGATIVE_VALUE);
        }

        match (body.name, u64::try_from(value)) {
            (Some(name), Ok(value)) if violations.is_empty() => Ok(CreateCounter { name, value }),
            _ => Err(ApiError::validation(&violations)),
        }
    }
}

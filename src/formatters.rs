use serde::Serialize;
use std::fmt::Display;

/// The only shape a failed lookup is ever printed as.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Formats a tool result as pretty-printed JSON (2-space indent).
///
/// `Ok` values are serialized as-is, `Err` values become `{"error": "<message>"}`.
pub fn render<T, E>(result: &Result<T, E>) -> serde_json::Result<String>
where
    T: Serialize,
    E: Display,
{
    match result {
        Ok(value) => serde_json::to_string_pretty(value),
        Err(err) => render_error(err),
    }
}

pub fn render_error(message: impl Display) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ErrorBody::new(message.to_string()))
}

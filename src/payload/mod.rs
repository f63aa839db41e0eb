//! Raw monitor-API payload model.
//!
//! Typed deserialization of the upstream monitoring payload. Fields the
//! upstream may omit are defaulted here so the formatter never has to error.

mod models;
mod ranges;

pub use models::*;
pub use ranges::*;

use thiserror::Error;

/// Payload decoding error types.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("malformed monitor payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a raw JSON monitor payload.
pub fn parse_payload(raw: &str) -> Result<MonitorPayload, PayloadError> {
    Ok(serde_json::from_str(raw)?)
}

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ApiError;
use crate::domain::{WineryId, WineryProfile};

#[derive(Debug)]
pub enum Parsed<T> {
    /// Availability check; nothing gets written.
    Ping,
    Payload(T),
}

/// Reads a request body, answering `test` pings before any typed parsing.
///
/// The body only has to be JSON for a ping to succeed, whatever its other fields
/// hold and whatever `Content-Type` it was sent with.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<Parsed<T>, ApiError> {
    let value: Value = serde_json::from_slice(body)?;
    if value.get("test").and_then(Value::as_bool) == Some(true) {
        return Ok(Parsed::Ping);
    }
    Ok(Parsed::Payload(serde_json::from_value(value)?))
}

/// Fields shared by every generation endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct WineryPayload {
    pub winery_id: Option<String>,
    pub winery_profile: Option<WineryProfile>,
}

impl WineryPayload {
    pub fn validate(self) -> Result<(WineryId, WineryProfile), ApiError> {
        match (WineryId::parse(self.winery_id.as_ref()), self.winery_profile) {
            (Some(winery_id), Some(profile)) => Ok((winery_id, profile)),
            _ => Err(ApiError::MissingFields),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Availability {
    pub success: bool,
    pub message: String,
}

impl Availability {
    pub fn of(endpoint: &str) -> Self {
        Self {
            success: true,
            message: format!("{endpoint} endpoint is available"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: &'static str,
}

impl<T: Serialize> Success<T> {
    pub fn new(data: T, message: &'static str) -> Self {
        Self {
            success: true,
            data,
            message,
        }
    }
}

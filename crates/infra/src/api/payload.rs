//! Response payloads
//!
//! The backend answers with JSON most of the time, but some deployments
//! serve listings as `application/octet-stream`. Both shapes decode the same
//! way: opaque bytes are read as UTF-8 text and parsed as JSON.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::ApiError;

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No body (204 or zero-length).
    Empty,
    /// Body served as JSON and already parsed.
    Structured(Value),
    /// Body served under any other content type.
    Bytes(Vec<u8>),
}

impl Payload {
    /// Pick the representation from the response content type.
    pub fn from_response_parts(content_type: Option<&str>, body: Vec<u8>) -> Result<Self, ApiError> {
        if body.is_empty() {
            return Ok(Self::Empty);
        }

        let is_json = content_type
            .map(|ct| ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
            .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"));

        if is_json {
            serde_json::from_slice(&body)
                .map(Self::Structured)
                .map_err(|err| ApiError::Decode(format!("invalid JSON body: {err}")))
        } else {
            Ok(Self::Bytes(body))
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Decode into `T`; an empty body decodes as JSON `null`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            Self::Empty => serde_json::from_value(Value::Null)
                .map_err(|err| ApiError::Decode(format!("empty body: {err}"))),
            Self::Structured(value) => serde_json::from_value(value)
                .map_err(|err| ApiError::Decode(err.to_string())),
            Self::Bytes(bytes) => {
                let text = std::str::from_utf8(&bytes)
                    .map_err(|err| ApiError::Decode(format!("body is not UTF-8: {err}")))?;
                serde_json::from_str(text).map_err(|err| ApiError::Decode(err.to_string()))
            }
        }
    }

    /// Decode into `T`, or `fallback` when the backend sent no body.
    pub fn decode_or<T: DeserializeOwned>(self, fallback: T) -> Result<T, ApiError> {
        if self.is_empty() {
            return Ok(fallback);
        }
        self.decode()
    }

    /// Decode a listing; an empty body is an empty list.
    pub fn decode_list<T: DeserializeOwned>(self) -> Result<Vec<T>, ApiError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        self.decode()
    }
}

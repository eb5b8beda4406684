//! Conversions from external infrastructure errors into domain errors.

use base64::DecodeError as Base64Error;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use travelgate_domain::TravelgateError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TravelgateError);

impl From<InfraError> for TravelgateError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TravelgateError> for InfraError {
    fn from(value: TravelgateError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoTravelgateError {
    fn into_travelgate(self) -> TravelgateError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TravelgateError */
/* -------------------------------------------------------------------------- */

impl IntoTravelgateError for HttpError {
    fn into_travelgate(self) -> TravelgateError {
        if self.is_timeout() {
            return TravelgateError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return TravelgateError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return TravelgateError::Decode(self.to_string());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
            return TravelgateError::Http { status: code, message };
        }

        if self.is_builder() {
            return TravelgateError::Internal(format!("invalid HTTP request: {self}"));
        }

        TravelgateError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_travelgate())
    }
}

/* -------------------------------------------------------------------------- */
/* Payload and token decoding */
/* -------------------------------------------------------------------------- */

impl IntoTravelgateError for JsonError {
    fn into_travelgate(self) -> TravelgateError {
        TravelgateError::Decode(format!("invalid JSON at line {} column {}: {self}", self.line(), self.column()))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_travelgate())
    }
}

impl IntoTravelgateError for Base64Error {
    fn into_travelgate(self) -> TravelgateError {
        TravelgateError::Auth(format!("malformed token segment: {self}"))
    }
}

impl From<Base64Error> for InfraError {
    fn from(value: Base64Error) -> Self {
        InfraError(value.into_travelgate())
    }
}

impl IntoTravelgateError for UrlError {
    fn into_travelgate(self) -> TravelgateError {
        TravelgateError::Config(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_travelgate())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

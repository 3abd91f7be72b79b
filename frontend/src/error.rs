//! Failures of the two backend calls.
//!
//! Everything the network layer can hit collapses into [`ApiError`].  The
//! reducers never see the error itself, only [`ApiError::user_message`],
//! which is the text placed in the transcript.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::constants::{GENERIC_SEND_ERROR, UNKNOWN_ERROR_DETAIL};
use crate::models::ErrorBody;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("no global window exists")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("API request failed: {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a non-2xx response body.  A body that is
    /// not JSON yields the "unknown error" detail; valid JSON without a
    /// `detail` leaves it empty.
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        let detail = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.detail_text(),
            Err(_) => Some(UNKNOWN_ERROR_DETAIL.to_string()),
        };
        ApiError::Status {
            status,
            status_text: status_text.to_string(),
            detail,
        }
    }

    /// Text shown in the system turn after a failed send.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status {
                status,
                status_text,
                detail: None,
            } => format!("Error {}: {}", status, status_text),
            ApiError::NoWindow | ApiError::Network(_) | ApiError::Decode(_) => {
                GENERIC_SEND_ERROR.to_string()
            }
        }
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(text)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_preferred() {
        let err = ApiError::from_status(503, "Service Unavailable", r#"{"detail":"🔄 sobrecargado"}"#);
        assert_eq!(err.user_message(), "🔄 sobrecargado");
    }

    #[test]
    fn missing_detail_uses_status_line() {
        let err = ApiError::from_status(500, "Internal Server Error", r#"{"error":"x"}"#);
        assert_eq!(err.user_message(), "Error 500: Internal Server Error");
    }

    #[test]
    fn non_json_body_is_unknown_error() {
        let err = ApiError::from_status(502, "Bad Gateway", "<html>gateway</html>");
        assert_eq!(err.user_message(), UNKNOWN_ERROR_DETAIL);
    }

    #[test]
    fn transport_failures_use_generic_text() {
        assert_eq!(ApiError::Network("Failed to fetch".into()).user_message(), GENERIC_SEND_ERROR);
        assert_eq!(ApiError::Decode("eof".into()).user_message(), GENERIC_SEND_ERROR);
    }

    #[test]
    fn display_mentions_status() {
        let err = ApiError::from_status(404, "Not Found", "{}");
        assert_eq!(err.to_string(), "API request failed: 404 Not Found");
    }
}

//! Generic operation result envelope.
//!
//! Returned by delete operations instead of an empty body. The `message`
//! field carries the literal string `"true"` on success; clients compare
//! against that string, so it must not become a JSON boolean.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Value of [`CustomResponse::message`] for a successful operation.
pub const SUCCESS_MARKER: &str = "true";

/// `{ status, timestamp, message, description }` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomResponse {
    /// HTTP-style numeric status code.
    pub status: u16,
    pub timestamp: Timestamp,
    pub message: String,
    /// Human-readable confirmation text.
    pub description: String,
}

impl CustomResponse {
    /// Build a `200` success envelope stamped with the current time.
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            status: 200,
            timestamp: chrono::Utc::now(),
            message: SUCCESS_MARKER.to_string(),
            description: description.into(),
        }
    }

    /// Whether this envelope reports success.
    pub fn is_success(&self) -> bool {
        self.message == SUCCESS_MARKER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_sets_status_and_marker() {
        let before = chrono::Utc::now();
        let response = CustomResponse::success("Programa eliminado");

        assert_eq!(response.status, 200);
        assert_eq!(response.message, "true");
        assert_eq!(response.description, "Programa eliminado");
        assert!(response.timestamp >= before);
        assert!(response.is_success());
    }

    #[test]
    fn message_serializes_as_string() {
        let json = serde_json::to_value(CustomResponse::success("ok")).unwrap();
        assert_eq!(json["message"], serde_json::json!("true"));
        assert_eq!(json["status"], 200);
        assert!(json["timestamp"].is_string());
    }
}

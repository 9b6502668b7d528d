//! Tracker API-specific error types.

/// Fallback shown when a failed response carries no usable error message.
///
pub const CREATE_ISSUE_FALLBACK_MESSAGE: &str = "Failed to create issue. Please try again.";

/// Errors that can occur during tracker API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned a non-2xx response
    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Generic API error
    #[error("Tracker API error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

impl ApiError {
    /// Return the message to surface to the user for a failed submission:
    /// the server-provided `error` string when one was parsed, otherwise
    /// the fixed fallback. Transport and server failures are deliberately
    /// not distinguished here.
    ///
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => CREATE_ISSUE_FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::Api {
            status: 404,
            message: Some("Not found".to_string()),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Not found"));

        let error = ApiError::Api {
            status: 500,
            message: None,
        };
        assert!(error.to_string().contains("no message"));

        let error = ApiError::Other("Test error".to_string());
        assert!(error.to_string().contains("Tracker API error"));
        assert!(error.to_string().contains("Test error"));
    }

    #[test]
    fn test_user_message_prefers_server_error_string() {
        let error = ApiError::Api {
            status: 500,
            message: Some("DB down".to_string()),
        };
        assert_eq!(error.user_message(), "DB down");
    }

    #[test]
    fn test_user_message_falls_back_when_absent() {
        let error = ApiError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(error.user_message(), CREATE_ISSUE_FALLBACK_MESSAGE);
    }
}

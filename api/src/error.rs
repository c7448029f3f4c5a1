//! Error taxonomy for backend calls.

use thiserror::Error;

/// Everything that can go wrong talking to the inventory backend.
///
/// The variants mirror how the client reacts, not just the HTTP status:
/// [`Unauthorized`](ApiError::Unauthorized) is globally fatal to the session
/// (the transport has already cleared stored credentials by the time a caller
/// sees it), [`Forbidden`](ApiError::Forbidden) is a non-fatal notice, and the
/// rest stay local to the call site that triggered them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not authorized, please sign in again")]
    Unauthorized,

    #[error("you do not have permission to perform this action")]
    Forbidden,

    #[error("the requested record was not found")]
    NotFound,

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status and its body text to an error.
    ///
    /// The backend reports failures as `{"message": "..."}`; anything else
    /// falls back to the raw body or a generic per-status message.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            _ => ApiError::Api {
                status,
                message: extract_message(body)
                    .unwrap_or_else(|| format!("request failed with status {status}")),
            },
        }
    }

    /// Whether this error ended the session (global 401 handling applies).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden)
    }
}

/// Pull a human-readable message out of a JSON error body, if it has one.
fn extract_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return Some(parsed.message);
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(ApiError::from_status(401, "").is_unauthorized());
        assert!(ApiError::from_status(403, "").is_forbidden());
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound));
    }

    #[test]
    fn test_message_extracted_from_json_body() {
        let err = ApiError::from_status(400, r#"{"message":"SKU already exists"}"#);
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "SKU already exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_opaque_body_falls_back_to_status_text() {
        let err = ApiError::from_status(500, "");
        assert_eq!(
            err.to_string(),
            "request failed with status 500".to_string()
        );
    }
}

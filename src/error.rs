use std::fmt;

/// Central error types for the shelter app
#[derive(Debug)]
pub enum AppError {
    /// Transport error (request never produced a response)
    Network(String),
    /// Response body could not be decoded
    Json(String),
    /// Non-success HTTP status, with the backend's message field when present
    Api { status: u16, message: Option<String> },
    /// Validation error (e.g. invalid form inputs)
    Validation(String),
    /// Resource not found
    NotFound(String),
    /// Filesystem error
    Io(std::io::Error),
    /// Image processing error
    Image(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Json(msg) => write!(f, "Decode error: {}", msg),
            AppError::Api { status, message } => match message {
                Some(msg) => write!(f, "API error {}: {}", status, msg),
                None => write!(f, "API error {}", status),
            },
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Io(e) => write!(f, "Filesystem error: {}", e),
            AppError::Image(msg) => write!(f, "Image processing error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Json(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}

impl AppError {
    /// 401/403 responses force a logout (see `notify::handle_error`)
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Api { status: 401 | 403, .. })
    }

    /// User-facing message for the toast layer.
    ///
    /// HTTP errors map by status; a message supplied by the backend wins
    /// over the generic text.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { status, message } => message.clone().unwrap_or_else(|| {
                match status {
                    400 => "Invalid request. Check the submitted data.".to_string(),
                    401 => "Your session has expired. Please sign in again.".to_string(),
                    403 => "You do not have permission for this action.".to_string(),
                    404 => "The requested record was not found.".to_string(),
                    409 => "The record conflicts with an existing one.".to_string(),
                    422 => "The submitted data was rejected by the server.".to_string(),
                    500 => "Internal server error. Please try again later.".to_string(),
                    503 => "The service is temporarily unavailable.".to_string(),
                    _ => format!("Unexpected server error ({}).", status),
                }
            }),
            AppError::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            AppError::Json(_) => "The server returned an unexpected response.".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => format!("{} was not found.", msg),
            AppError::Io(_) => "Error accessing local files.".to_string(),
            AppError::Image(_) => "Error processing image.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_overrides_generic_text() {
        let err = AppError::Api {
            status: 409,
            message: Some("A cat with this name already exists".to_string()),
        };
        assert_eq!(err.user_message(), "A cat with this name already exists");
    }

    #[test]
    fn test_generic_message_by_status() {
        let err = AppError::Api {
            status: 404,
            message: None,
        };
        assert_eq!(err.user_message(), "The requested record was not found.");

        let err = AppError::Api {
            status: 418,
            message: None,
        };
        assert_eq!(err.user_message(), "Unexpected server error (418).");
    }

    #[test]
    fn test_auth_error_detection() {
        for status in [401u16, 403] {
            let err = AppError::Api {
                status,
                message: None,
            };
            assert!(err.is_auth_error());
        }
        let err = AppError::Api {
            status: 500,
            message: None,
        };
        assert!(!err.is_auth_error());
        assert!(!AppError::Network("down".to_string()).is_auth_error());
    }
}

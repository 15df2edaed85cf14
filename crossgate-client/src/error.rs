//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required (401); the gateway has already torn the
    /// session down by the time the caller sees this
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (403). Local to the call site; the session is kept.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error, client-side or 400/422 from the server.
    /// Never reaches the network when raised client-side.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Structured business rejection from the server
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session store / export file I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut parts: Vec<String> = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                match &error.message {
                    Some(msg) => parts.push(format!("{field}: {msg}")),
                    None => parts.push(format!("{field}: {}", error.code)),
                }
            }
        }
        parts.sort();
        ClientError::Validation(parts.join("; "))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "不能为空"))]
        name: String,
    }

    #[test]
    fn validation_errors_render_field_and_message() {
        let err = Probe {
            name: String::new(),
        }
        .validate()
        .unwrap_err();
        let client_err = ClientError::from(err);
        assert!(matches!(&client_err, ClientError::Validation(msg) if msg.contains("name")));
        assert!(client_err.to_string().contains("不能为空"));
    }
}

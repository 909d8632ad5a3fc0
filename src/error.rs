//! Configuration error types for the FedEx API client.
//!
//! This module contains the error raised whenever credentials or request
//! inputs are incomplete. Every such check runs before a request document
//! is built, so a [`ConfigError`] always means nothing was sent to FedEx.
//!
//! # Example
//!
//! ```rust
//! use fedex_api::{ConfigError, ServiceKey};
//!
//! let result = ServiceKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyValue { field: "key" })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring credentials or building requests.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A credential value was provided but is empty.
    #[error("Credential '{field}' cannot be empty. Please provide the value issued by FedEx.")]
    EmptyValue {
        /// The name of the empty credential.
        field: &'static str,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before the request is sent.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Endpoint override URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://gateway.example.com/xml/').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_error_message() {
        let error = ConfigError::EmptyValue { field: "meter" };
        let message = error.to_string();
        assert!(message.contains("'meter'"));
        assert!(message.contains("cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "recipient" };
        let message = error.to_string();
        assert!(message.contains("recipient"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_host_url_error_message() {
        let error = ConfigError::InvalidHostUrl {
            url: "not a url".to_string(),
        };
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyValue { field: "key" };
        let _: &dyn std::error::Error = &error;
    }
}

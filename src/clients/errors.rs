//! HTTP-specific error types.
//!
//! A non-2xx status is not an error at this layer: the carrier gateway
//! reports SOAP faults with HTTP 500 and the fault body still has to be
//! classified. Only requests that cannot be sent, or that fail on the
//! wire, produce an [`HttpError`].

use thiserror::Error;

/// Error returned when a request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use fedex_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody;
/// assert_eq!(error.to_string(), "Cannot post without a request document.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request document was empty.
    #[error("Cannot post without a request document.")]
    MissingBody,

    /// The endpoint URL was empty or not HTTP(S).
    #[error("Invalid endpoint URL '{url}'.")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use fedex_api::clients::HttpError;
///
/// match client.post(request).await {
///     Ok(response) => { /* classify the body */ }
///     Err(HttpError::InvalidRequest(e)) => { /* request never sent */ }
///     Err(HttpError::Network(e)) => { /* may or may not have reached the carrier */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

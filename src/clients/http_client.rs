//! HTTP client for carrier gateway communication.
//!
//! This module provides the [`HttpClient`] type, which posts request
//! documents to the gateway and hands back the raw response.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for posting request documents.
///
/// The client sets a User-Agent and XML content negotiation headers on every
/// request. It never retries: label and pickup creation are not idempotent,
/// so a failed or ambiguous request is always surfaced to the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use fedex_api::clients::{HttpClient, HttpRequest};
///
/// let client = HttpClient::new(None)?;
/// let request = HttpRequest::builder("https://gatewaybeta.fedex.com:443/xml/")
///     .body(document)
///     .build()?;
///
/// let response = client.post(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// `user_agent_prefix` is prepended to the library's own User-Agent.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be
    /// initialized.
    pub fn new(user_agent_prefix: Option<&str>) -> Result<Self, HttpError> {
        let prefix = user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{prefix}FedEx API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Accept".to_string(),
            "application/xml, text/xml".to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Posts a request document and returns the raw response.
    ///
    /// The response is returned for any status code; classifying the body
    /// is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    pub async fn post(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        headers.insert(
            "Content-Type".to_string(),
            request.body_type.as_content_type().to_string(),
        );
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = self.client.post(&request.url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(request.body).send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        if !(200..=299).contains(&code) {
            tracing::warn!(
                "Carrier gateway at {} returned HTTP {}",
                request.url,
                code
            );
        }

        Ok(HttpResponse::new(code, res_headers, body))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

//! HTTP request types.
//!
//! Every carrier operation is a single POST of an XML document to the
//! gateway URL, so [`HttpRequest`] only carries the URL, the document and
//! any extra headers.

use std::collections::HashMap;

use crate::clients::errors::InvalidHttpRequestError;

/// Content type for request documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DataType {
    /// `application/xml`
    #[default]
    Xml,
    /// `text/xml`, for gateways that only accept the SOAP 1.1 media type.
    TextXml,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Xml => "application/xml",
            Self::TextXml => "text/xml",
        }
    }
}

/// A POST request carrying one request document.
///
/// # Example
///
/// ```rust
/// use fedex_api::clients::{DataType, HttpRequest};
///
/// let request = HttpRequest::builder("https://gatewaybeta.fedex.com:443/xml/")
///     .body("<TrackRequest/>")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.body_type, DataType::Xml);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Absolute endpoint URL.
    pub url: String,
    /// The XML document.
    pub body: String,
    /// The content type of the body.
    pub body_type: DataType,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for a request to `url`.
    #[must_use]
    pub fn builder(url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `url` is not an `http://` or `https://` URL
    /// - `body` is empty
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        let has_scheme = self.url.starts_with("https://") || self.url.starts_with("http://");
        if !has_scheme {
            return Err(InvalidHttpRequestError::InvalidUrl {
                url: self.url.clone(),
            });
        }

        if self.body.trim().is_empty() {
            return Err(InvalidHttpRequestError::MissingBody);
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    url: String,
    body: String,
    body_type: DataType,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: String::new(),
            body_type: DataType::default(),
            extra_headers: None,
        }
    }

    /// Sets the request document.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the content type of the request document.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = body_type;
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            url: self.url,
            body: self.body,
            body_type: self.body_type,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://gatewaybeta.fedex.com:443/xml/";

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Xml.as_content_type(), "application/xml");
        assert_eq!(DataType::TextXml.as_content_type(), "text/xml");
    }

    #[test]
    fn test_builder_creates_valid_request() {
        let request = HttpRequest::builder(URL)
            .body("<RateRequest/>")
            .body_type(DataType::TextXml)
            .build()
            .unwrap();

        assert_eq!(request.url, URL);
        assert_eq!(request.body, "<RateRequest/>");
        assert_eq!(request.body_type, DataType::TextXml);
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_verify_requires_body() {
        let result = HttpRequest::builder(URL).body("   ").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::MissingBody)));
    }

    #[test]
    fn test_verify_requires_http_url() {
        let result = HttpRequest::builder("gateway.fedex.com/xml")
            .body("<RateRequest/>")
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidUrl { url }) if url == "gateway.fedex.com/xml"
        ));
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(URL)
            .body("<RateRequest/>")
            .header("X-Request-Source", "batch")
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(headers.get("X-Request-Source"), Some(&"batch".to_string()));
    }
}

//! HTTP response type.

use std::collections::HashMap;

/// A raw response from the carrier gateway.
///
/// Headers are keyed by lowercase name; a header may repeat.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use fedex_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(500, HashMap::new(), "<soapenv:Fault/>".to_string());
/// assert!(!response.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercase names.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for a 2xx status.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (k, v) in pairs {
            map.entry((*k).to_string()).or_default().push((*v).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_for_2xx_only() {
        assert!(HttpResponse::new(200, HashMap::new(), String::new()).is_ok());
        assert!(HttpResponse::new(299, HashMap::new(), String::new()).is_ok());
        assert!(!HttpResponse::new(500, HashMap::new(), String::new()).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), String::new()).is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            headers(&[("content-type", "text/xml;charset=UTF-8")]),
            String::new(),
        );
        assert_eq!(response.header("Content-Type"), Some("text/xml;charset=UTF-8"));
        assert_eq!(response.content_type(), Some("text/xml;charset=UTF-8"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_repeated_header_returns_first_value() {
        let response = HttpResponse::new(
            200,
            headers(&[("set-cookie", "a=1"), ("set-cookie", "b=2")]),
            String::new(),
        );
        assert_eq!(response.header("set-cookie"), Some("a=1"));
        assert_eq!(response.headers["set-cookie"].len(), 2);
    }
}

//! XML error types.

use std::io;

use thiserror::Error;

/// Errors that can occur while writing a request document or parsing a
/// response body.
#[derive(Debug, Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document ended before every element was closed.
    #[error("unexpected end of document: {0}")]
    UnexpectedEof(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_names_the_path() {
        let error = XmlError::MissingElement("fault.detail.fault.reason".to_string());
        assert_eq!(
            error.to_string(),
            "missing required XML element: fault.detail.fault.reason"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let error: XmlError = io::Error::new(io::ErrorKind::Other, "disk full").into();
        assert!(matches!(error, XmlError::Io(_)));
        assert!(error.to_string().contains("disk full"));
    }
}

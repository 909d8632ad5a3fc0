//! Electronic trade document upload.

use base64::prelude::*;
use serde_json::Value;

use crate::config::Credentials;
use crate::error::ConfigError;
use crate::request::envelope::OperationSpec;
use crate::request::errors::{OperationFamily, ShipmentError};
use crate::request::Operation;
use crate::xml::{XmlError, XmlWriter};

pub const SPEC: OperationSpec = OperationSpec {
    name: "upload_documents",
    root: "UploadDocumentsRequest",
    namespace: "uploaddocument",
    service_id: "cdus",
    major: 1,
    reply_key: "upload_documents_reply",
    family: OperationFamily::DocumentUpload,
};

pub const DEFAULT_DOCUMENT_TYPE: &str = "COMMERCIAL_INVOICE";
pub const DEFAULT_FILE_NAME: &str = "ci.pdf";

/// A trade document, usually a commercial invoice, uploaded ahead of an
/// international shipment.
///
/// # Example
///
/// ```rust
/// use fedex_api::DocumentUpload;
///
/// let upload = DocumentUpload::builder()
///     .origin_country_code("US")
///     .destination_country_code("CA")
///     .content_bytes(b"%PDF-1.4")
///     .build()
///     .unwrap();
///
/// assert_eq!(upload.file_name(), "ci.pdf");
/// assert_eq!(upload.content(), "JVBERi0xLjQ=");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentUpload {
    origin_country_code: String,
    destination_country_code: String,
    document_type: String,
    file_name: String,
    content: String,
    debug: bool,
}

impl DocumentUpload {
    #[must_use]
    pub fn builder() -> DocumentUploadBuilder {
        DocumentUploadBuilder::default()
    }

    /// Shortcut for a commercial invoice from raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a country code or
    /// the content is empty.
    pub fn from_bytes(
        origin_country_code: impl Into<String>,
        destination_country_code: impl Into<String>,
        bytes: &[u8],
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .origin_country_code(origin_country_code)
            .destination_country_code(destination_country_code)
            .content_bytes(bytes)
            .build()
    }

    #[must_use]
    pub fn origin_country_code(&self) -> &str {
        &self.origin_country_code
    }

    #[must_use]
    pub fn destination_country_code(&self) -> &str {
        &self.destination_country_code
    }

    #[must_use]
    pub fn document_type(&self) -> &str {
        &self.document_type
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The base64-encoded document.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Builder for [`DocumentUpload`].
#[derive(Debug, Default)]
pub struct DocumentUploadBuilder {
    origin_country_code: Option<String>,
    destination_country_code: Option<String>,
    document_type: Option<String>,
    file_name: Option<String>,
    content: Option<String>,
    debug: bool,
}

impl DocumentUploadBuilder {
    #[must_use]
    pub fn origin_country_code(mut self, code: impl Into<String>) -> Self {
        self.origin_country_code = Some(code.into());
        self
    }

    #[must_use]
    pub fn destination_country_code(mut self, code: impl Into<String>) -> Self {
        self.destination_country_code = Some(code.into());
        self
    }

    #[must_use]
    pub fn document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = Some(document_type.into());
        self
    }

    #[must_use]
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets already base64-encoded content.
    #[must_use]
    pub fn content(mut self, encoded: impl Into<String>) -> Self {
        self.content = Some(encoded.into());
        self
    }

    /// Sets raw file bytes; they are base64-encoded here.
    #[must_use]
    pub fn content_bytes(mut self, bytes: &[u8]) -> Self {
        self.content = Some(BASE64_STANDARD.encode(bytes));
        self
    }

    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a country code or
    /// the content is missing or empty.
    pub fn build(self) -> Result<DocumentUpload, ConfigError> {
        let present = |value: Option<String>, field: &'static str| {
            value
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingRequiredField { field })
        };

        Ok(DocumentUpload {
            origin_country_code: present(self.origin_country_code, "origin_country_code")?,
            destination_country_code: present(
                self.destination_country_code,
                "destination_country_code",
            )?,
            document_type: self
                .document_type
                .unwrap_or_else(|| DEFAULT_DOCUMENT_TYPE.to_string()),
            file_name: self
                .file_name
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            content: present(self.content, "content")?,
            debug: self.debug,
        })
    }
}

#[derive(Debug)]
pub struct UploadDocuments<'a>(pub &'a DocumentUpload);

impl Operation for UploadDocuments<'_> {
    type Output = Value;

    fn spec(&self) -> OperationSpec {
        SPEC
    }

    fn write_body(&self, w: &mut XmlWriter, _credentials: &Credentials) -> Result<(), XmlError> {
        let upload = self.0;
        w.text("OriginCountryCode", &upload.origin_country_code)?;
        w.text("DestinationCountryCode", &upload.destination_country_code)?;
        w.element("Documents", |w| {
            w.text("DocumentType", &upload.document_type)?;
            w.text("FileName", &upload.file_name)?;
            w.text("DocumentContent", &upload.content)
        })
    }

    fn extract(&self, reply: &Value) -> Result<Value, ShipmentError> {
        Ok(reply.clone())
    }

    fn debug(&self) -> bool {
        self.0.debug
    }
}

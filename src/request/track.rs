//! Package tracking.

use serde_json::Value;

use crate::config::Credentials;
use crate::error::ConfigError;
use crate::request::envelope::{Localization, OperationSpec, EN_US};
use crate::request::errors::{OperationFamily, ShipmentError};
use crate::request::{required, Operation};
use crate::xml::{XmlError, XmlWriter};

pub const SPEC: OperationSpec = OperationSpec {
    name: "track",
    root: "TrackRequest",
    namespace: "track",
    service_id: "trck",
    major: 5,
    reply_key: "track_reply",
    family: OperationFamily::Track,
};

/// Default identifier type.
pub const TRACKING_NUMBER_OR_DOORTAG: &str = "TRACKING_NUMBER_OR_DOORTAG";

/// Tracks one package by tracking number.
///
/// # Example
///
/// ```rust
/// use fedex_api::TrackRequest;
///
/// let request = TrackRequest::builder()
///     .tracking_number("794644790138")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.tracking_type(), "TRACKING_NUMBER_OR_DOORTAG");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackRequest {
    tracking_number: String,
    tracking_type: String,
    unique_identifier: Option<String>,
    debug: bool,
}

impl TrackRequest {
    #[must_use]
    pub fn builder() -> TrackRequestBuilder {
        TrackRequestBuilder::default()
    }

    #[must_use]
    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    #[must_use]
    pub fn tracking_type(&self) -> &str {
        &self.tracking_type
    }

    /// Disambiguates a tracking number the carrier has reused.
    #[must_use]
    pub fn unique_identifier(&self) -> Option<&str> {
        self.unique_identifier.as_deref()
    }
}

/// Builder for [`TrackRequest`].
#[derive(Debug, Default)]
pub struct TrackRequestBuilder {
    tracking_number: Option<String>,
    tracking_type: Option<String>,
    unique_identifier: Option<String>,
    debug: bool,
}

impl TrackRequestBuilder {
    #[must_use]
    pub fn tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }

    #[must_use]
    pub fn tracking_type(mut self, tracking_type: impl Into<String>) -> Self {
        self.tracking_type = Some(tracking_type.into());
        self
    }

    #[must_use]
    pub fn unique_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.unique_identifier = Some(identifier.into());
        self
    }

    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] without a tracking number.
    pub fn build(self) -> Result<TrackRequest, ConfigError> {
        let tracking_number = self
            .tracking_number
            .filter(|n| !n.trim().is_empty())
            .ok_or(ConfigError::MissingRequiredField {
                field: "tracking_number",
            })?;
        Ok(TrackRequest {
            tracking_number,
            tracking_type: self
                .tracking_type
                .unwrap_or_else(|| TRACKING_NUMBER_OR_DOORTAG.to_string()),
            unique_identifier: self.unique_identifier,
            debug: self.debug,
        })
    }
}

#[derive(Debug)]
pub struct Track<'a>(pub &'a TrackRequest);

impl Operation for Track<'_> {
    type Output = Value;

    fn spec(&self) -> OperationSpec {
        SPEC
    }

    fn localization(&self) -> Option<Localization> {
        Some(EN_US)
    }

    fn write_body(&self, w: &mut XmlWriter, credentials: &Credentials) -> Result<(), XmlError> {
        let request = self.0;
        w.element("PackageIdentifier", |w| {
            w.text("Value", &request.tracking_number)?;
            w.text("Type", &request.tracking_type)
        })?;
        w.optional_text(
            "TrackingNumberUniqueIdentifier",
            request.unique_identifier.as_deref(),
        )?;
        w.text("ShipmentAccountNumber", credentials.account_number().as_ref())?;
        w.text("IncludeDetailedScans", true)
    }

    fn extract(&self, reply: &Value) -> Result<Value, ShipmentError> {
        Ok(required(reply, SPEC.reply_key, &["track_details"])?.clone())
    }

    fn debug(&self) -> bool {
        self.0.debug
    }
}

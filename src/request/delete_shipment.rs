//! Shipment deletion.

use serde_json::Value;

use crate::config::Credentials;
use crate::error::ConfigError;
use crate::request::envelope::OperationSpec;
use crate::request::errors::{OperationFamily, ShipmentError};
use crate::request::Operation;
use crate::xml::{XmlError, XmlWriter};

pub const SPEC: OperationSpec = OperationSpec {
    name: "delete_shipment",
    root: "DeleteShipmentRequest",
    namespace: "ship",
    service_id: "ship",
    major: 10,
    reply_key: "shipment_reply",
    family: OperationFamily::Label,
};

/// Default deletion scope.
pub const DELETE_ALL_PACKAGES: &str = "DELETE_ALL_PACKAGES";

/// Deletes a previously created shipment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteShipmentRequest {
    tracking_number: String,
    deletion_control: String,
}

impl DeleteShipmentRequest {
    #[must_use]
    pub fn builder() -> DeleteShipmentRequestBuilder {
        DeleteShipmentRequestBuilder::default()
    }

    #[must_use]
    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    #[must_use]
    pub fn deletion_control(&self) -> &str {
        &self.deletion_control
    }
}

/// Builder for [`DeleteShipmentRequest`].
#[derive(Debug, Default)]
pub struct DeleteShipmentRequestBuilder {
    tracking_number: Option<String>,
    deletion_control: Option<String>,
}

impl DeleteShipmentRequestBuilder {
    #[must_use]
    pub fn tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }

    /// Overrides the deletion scope, [`DELETE_ALL_PACKAGES`] by default.
    #[must_use]
    pub fn deletion_control(mut self, deletion_control: impl Into<String>) -> Self {
        self.deletion_control = Some(deletion_control.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] without a tracking number.
    pub fn build(self) -> Result<DeleteShipmentRequest, ConfigError> {
        let tracking_number = self
            .tracking_number
            .filter(|n| !n.trim().is_empty())
            .ok_or(ConfigError::MissingRequiredField {
                field: "tracking_number",
            })?;
        Ok(DeleteShipmentRequest {
            tracking_number,
            deletion_control: self
                .deletion_control
                .unwrap_or_else(|| DELETE_ALL_PACKAGES.to_string()),
        })
    }
}

#[derive(Debug)]
pub struct DeleteShipment<'a>(pub &'a DeleteShipmentRequest);

impl Operation for DeleteShipment<'_> {
    type Output = bool;

    fn spec(&self) -> OperationSpec {
        SPEC
    }

    fn write_body(&self, w: &mut XmlWriter, _credentials: &Credentials) -> Result<(), XmlError> {
        w.element("TrackingId", |w| {
            w.text("TrackingIdType", "FEDEX")?;
            w.text("TrackingNumber", &self.0.tracking_number)
        })?;
        w.text("DeletionControl", &self.0.deletion_control)
    }

    fn extract(&self, _reply: &Value) -> Result<bool, ShipmentError> {
        Ok(true)
    }
}

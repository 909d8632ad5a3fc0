//! Pickup availability lookups.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::config::Credentials;
use crate::error::ConfigError;
use crate::models::Address;
use crate::request::envelope::OperationSpec;
use crate::request::errors::{OperationFamily, ShipmentError};
use crate::request::fragments::write_address;
use crate::request::pickup::{DEFAULT_CARRIER_CODE, DEFAULT_CLOSE_TIME};
use crate::request::Operation;
use crate::xml::{XmlError, XmlWriter};

pub const SPEC: OperationSpec = OperationSpec {
    name: "pickup_availability",
    root: "PickupAvailabilityRequest",
    namespace: "pickup",
    service_id: "disp",
    major: 5,
    reply_key: "pickup_availability_reply",
    family: OperationFamily::Pickup,
};

/// Asks which pickup windows are available at an address on a future day.
#[derive(Clone, Debug, PartialEq)]
pub struct PickupAvailabilityRequest {
    address: Address,
    dispatch: DateTime<FixedOffset>,
    close_time: String,
    carrier_code: String,
    debug: bool,
}

impl PickupAvailabilityRequest {
    #[must_use]
    pub fn builder() -> PickupAvailabilityRequestBuilder {
        PickupAvailabilityRequestBuilder::default()
    }

    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub const fn dispatch(&self) -> &DateTime<FixedOffset> {
        &self.dispatch
    }
}

/// Builder for [`PickupAvailabilityRequest`].
#[derive(Debug, Default)]
pub struct PickupAvailabilityRequestBuilder {
    address: Option<Address>,
    dispatch: Option<DateTime<FixedOffset>>,
    close_time: Option<String>,
    carrier_code: Option<String>,
    debug: bool,
}

impl PickupAvailabilityRequestBuilder {
    /// The shipper's pickup address.
    #[must_use]
    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Dispatch date and package ready time, read in the given offset.
    #[must_use]
    pub fn dispatch(mut self, at: impl Into<DateTime<FixedOffset>>) -> Self {
        self.dispatch = Some(at.into());
        self
    }

    #[must_use]
    pub fn close_time(mut self, close_time: impl Into<String>) -> Self {
        self.close_time = Some(close_time.into());
        self
    }

    #[must_use]
    pub fn carrier_code(mut self, carrier_code: impl Into<String>) -> Self {
        self.carrier_code = Some(carrier_code.into());
        self
    }

    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] without an address or
    /// dispatch time.
    pub fn build(self) -> Result<PickupAvailabilityRequest, ConfigError> {
        let address = self
            .address
            .ok_or(ConfigError::MissingRequiredField { field: "address" })?;
        let dispatch = self
            .dispatch
            .ok_or(ConfigError::MissingRequiredField { field: "dispatch" })?;

        Ok(PickupAvailabilityRequest {
            address,
            dispatch,
            close_time: self
                .close_time
                .unwrap_or_else(|| DEFAULT_CLOSE_TIME.to_string()),
            carrier_code: self
                .carrier_code
                .unwrap_or_else(|| DEFAULT_CARRIER_CODE.to_string()),
            debug: self.debug,
        })
    }
}

#[derive(Debug)]
pub struct PickupAvailability<'a>(pub &'a PickupAvailabilityRequest);

impl Operation for PickupAvailability<'_> {
    type Output = Value;

    fn spec(&self) -> OperationSpec {
        SPEC
    }

    fn write_body(&self, w: &mut XmlWriter, _credentials: &Credentials) -> Result<(), XmlError> {
        let request = self.0;
        write_address(w, "PickupAddress", &request.address)?;
        w.text("PickupRequestType", "FUTURE_DAY")?;
        w.text("DispatchDate", request.dispatch.format("%F"))?;
        w.text("NumberOfBusinessDays", 1)?;
        w.text("PackageReadyTime", request.dispatch.format("%T"))?;
        w.text("CustomerCloseTime", &request.close_time)?;
        w.text("Carriers", &request.carrier_code)
    }

    fn extract(&self, reply: &Value) -> Result<Value, ShipmentError> {
        Ok(reply.clone())
    }

    fn debug(&self) -> bool {
        self.0.debug
    }
}

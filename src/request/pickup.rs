//! Courier pickup scheduling.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::Value;

use crate::config::Credentials;
use crate::error::ConfigError;
use crate::models::{Package, Party};
use crate::request::envelope::OperationSpec;
use crate::request::errors::{OperationFamily, ShipmentError};
use crate::request::fragments::{write_address, write_contact};
use crate::request::{required_str, Operation};
use crate::xml::{XmlError, XmlWriter};

pub const SPEC: OperationSpec = OperationSpec {
    name: "pickup",
    root: "CreatePickupRequest",
    namespace: "pickup",
    service_id: "disp",
    major: 5,
    reply_key: "create_pickup_reply",
    family: OperationFamily::Pickup,
};

/// FedEx Ground.
pub const DEFAULT_CARRIER_CODE: &str = "FDXG";

/// Default business close time at the pickup location.
pub const DEFAULT_CLOSE_TIME: &str = "17:00:00";

/// Schedules a courier pickup at the shipper's address.
#[derive(Clone, Debug)]
pub struct PickupRequest {
    shipper: Party,
    packages: Vec<Package>,
    ready_timestamp: DateTime<FixedOffset>,
    close_time: String,
    carrier_code: String,
    debug: bool,
}

impl PickupRequest {
    #[must_use]
    pub fn builder() -> PickupRequestBuilder {
        PickupRequestBuilder::default()
    }

    #[must_use]
    pub const fn shipper(&self) -> &Party {
        &self.shipper
    }

    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    #[must_use]
    pub const fn ready_timestamp(&self) -> &DateTime<FixedOffset> {
        &self.ready_timestamp
    }

    /// Sum of all package weight values, reported in pounds.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.packages.iter().map(|p| p.weight.value).sum()
    }
}

/// Builder for [`PickupRequest`].
///
/// `shipper`, at least one package and `ready_timestamp` are required.
#[derive(Debug, Default)]
pub struct PickupRequestBuilder {
    shipper: Option<Party>,
    packages: Vec<Package>,
    ready_timestamp: Option<DateTime<FixedOffset>>,
    close_time: Option<String>,
    carrier_code: Option<String>,
    debug: bool,
}

impl PickupRequestBuilder {
    #[must_use]
    pub fn shipper(mut self, shipper: Party) -> Self {
        self.shipper = Some(shipper);
        self
    }

    #[must_use]
    pub fn package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    #[must_use]
    pub fn packages(mut self, packages: impl IntoIterator<Item = Package>) -> Self {
        self.packages.extend(packages);
        self
    }

    /// When the packages will be ready. Accepts any `chrono` offset.
    #[must_use]
    pub fn ready_timestamp(mut self, at: impl Into<DateTime<FixedOffset>>) -> Self {
        self.ready_timestamp = Some(at.into());
        self
    }

    /// Local close time as `HH:MM:SS`.
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
    /// Returns [`ConfigError::MissingRequiredField`] for a missing shipper,
    /// packages or ready timestamp.
    pub fn build(self) -> Result<PickupRequest, ConfigError> {
        let shipper = self
            .shipper
            .ok_or(ConfigError::MissingRequiredField { field: "shipper" })?;
        if self.packages.is_empty() {
            return Err(ConfigError::MissingRequiredField { field: "packages" });
        }
        let ready_timestamp = self
            .ready_timestamp
            .ok_or(ConfigError::MissingRequiredField {
                field: "ready_timestamp",
            })?;

        Ok(PickupRequest {
            shipper,
            packages: self.packages,
            ready_timestamp,
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
pub struct Pickup<'a>(pub &'a PickupRequest);

impl Operation for Pickup<'_> {
    type Output = String;

    fn spec(&self) -> OperationSpec {
        SPEC
    }

    fn write_body(&self, w: &mut XmlWriter, _credentials: &Credentials) -> Result<(), XmlError> {
        let request = self.0;
        w.element("OriginDetail", |w| {
            w.text("UseAccountAddress", false)?;
            w.element("PickupLocation", |w| {
                write_contact(w, &request.shipper.contact)?;
                write_address(w, "Address", &request.shipper.address)
            })?;
            w.text("PackageLocation", "NONE")?;
            w.text(
                "ReadyTimestamp",
                request
                    .ready_timestamp
                    .to_rfc3339_opts(SecondsFormat::Secs, false),
            )?;
            w.text("CompanyCloseTime", &request.close_time)
        })?;
        w.text("PackageCount", request.packages.len())?;
        w.element("TotalWeight", |w| {
            w.text("Units", "LB")?;
            w.text("Value", request.total_weight())
        })?;
        w.text("CarrierCode", &request.carrier_code)
    }

    fn extract(&self, reply: &Value) -> Result<String, ShipmentError> {
        Ok(required_str(reply, SPEC.reply_key, &["pickup_confirmation_number"])?.to_string())
    }

    fn debug(&self) -> bool {
        self.0.debug
    }
}

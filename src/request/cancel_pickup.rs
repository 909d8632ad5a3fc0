//! Pickup cancellation.

use chrono::NaiveDate;
use serde_json::Value;

use crate::config::Credentials;
use crate::error::ConfigError;
use crate::request::envelope::OperationSpec;
use crate::request::errors::{OperationFamily, ShipmentError};
use crate::request::pickup::DEFAULT_CARRIER_CODE;
use crate::request::Operation;
use crate::xml::{XmlError, XmlWriter};

pub const SPEC: OperationSpec = OperationSpec {
    name: "cancel_pickup",
    root: "CancelPickupRequest",
    namespace: "pickup",
    service_id: "disp",
    major: 5,
    reply_key: "cancel_pickup_reply",
    family: OperationFamily::Pickup,
};

pub const DEFAULT_REMARKS: &str = "Cancelling...";

/// Cancels a scheduled pickup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CancelPickupRequest {
    confirmation_number: String,
    scheduled_date: NaiveDate,
    carrier_code: String,
    remarks: String,
    debug: bool,
}

impl CancelPickupRequest {
    #[must_use]
    pub fn builder() -> CancelPickupRequestBuilder {
        CancelPickupRequestBuilder::default()
    }

    #[must_use]
    pub fn confirmation_number(&self) -> &str {
        &self.confirmation_number
    }

    #[must_use]
    pub const fn scheduled_date(&self) -> NaiveDate {
        self.scheduled_date
    }

    #[must_use]
    pub fn carrier_code(&self) -> &str {
        &self.carrier_code
    }
}

/// Builder for [`CancelPickupRequest`].
#[derive(Debug, Default)]
pub struct CancelPickupRequestBuilder {
    confirmation_number: Option<String>,
    scheduled_date: Option<NaiveDate>,
    carrier_code: Option<String>,
    remarks: Option<String>,
    debug: bool,
}

impl CancelPickupRequestBuilder {
    #[must_use]
    pub fn confirmation_number(mut self, number: impl Into<String>) -> Self {
        self.confirmation_number = Some(number.into());
        self
    }

    #[must_use]
    pub const fn scheduled_date(mut self, date: NaiveDate) -> Self {
        self.scheduled_date = Some(date);
        self
    }

    #[must_use]
    pub fn carrier_code(mut self, carrier_code: impl Into<String>) -> Self {
        self.carrier_code = Some(carrier_code.into());
        self
    }

    #[must_use]
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] without a confirmation
    /// number or scheduled date.
    pub fn build(self) -> Result<CancelPickupRequest, ConfigError> {
        let confirmation_number = self
            .confirmation_number
            .filter(|n| !n.trim().is_empty())
            .ok_or(ConfigError::MissingRequiredField {
                field: "confirmation_number",
            })?;
        let scheduled_date = self
            .scheduled_date
            .ok_or(ConfigError::MissingRequiredField {
                field: "scheduled_date",
            })?;

        Ok(CancelPickupRequest {
            confirmation_number,
            scheduled_date,
            carrier_code: self
                .carrier_code
                .unwrap_or_else(|| DEFAULT_CARRIER_CODE.to_string()),
            remarks: self.remarks.unwrap_or_else(|| DEFAULT_REMARKS.to_string()),
            debug: self.debug,
        })
    }
}

#[derive(Debug)]
pub struct CancelPickup<'a>(pub &'a CancelPickupRequest);

impl Operation for CancelPickup<'_> {
    type Output = bool;

    fn spec(&self) -> OperationSpec {
        SPEC
    }

    fn write_body(&self, w: &mut XmlWriter, _credentials: &Credentials) -> Result<(), XmlError> {
        let request = self.0;
        w.text("CarrierCode", &request.carrier_code)?;
        w.text("PickupConfirmationNumber", &request.confirmation_number)?;
        w.text("ScheduledDate", request.scheduled_date.format("%F"))?;
        w.text("Remarks", &request.remarks)
    }

    fn extract(&self, _reply: &Value) -> Result<bool, ShipmentError> {
        Ok(true)
    }

    fn debug(&self) -> bool {
        self.0.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountNumber, MeterNumber, Mode, Password, ServiceKey};
    use crate::request::build_document;

    fn credentials() -> Credentials {
        Credentials::builder()
            .key(ServiceKey::new("k").unwrap())
            .password(Password::new("p").unwrap())
            .account_number(AccountNumber::new("510087020").unwrap())
            .meter(MeterNumber::new("118546765").unwrap())
            .mode(Mode::Development)
            .build()
            .unwrap()
    }

    #[test]
    fn test_cancel_pickup_document() {
        let request = CancelPickupRequest::builder()
            .confirmation_number("20")
            .scheduled_date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
            .build()
            .unwrap();
        let xml = build_document(&credentials(), &CancelPickup(&request)).unwrap();

        assert!(xml.starts_with(r#"<CancelPickupRequest xmlns="http://fedex.com/ws/pickup/v5">"#));
        assert!(xml.ends_with(
            "<CarrierCode>FDXG</CarrierCode>\
             <PickupConfirmationNumber>20</PickupConfirmationNumber>\
             <ScheduledDate>2024-06-03</ScheduledDate>\
             <Remarks>Cancelling...</Remarks></CancelPickupRequest>"
        ));
    }

    #[test]
    fn test_build_requires_number_and_date() {
        assert_eq!(
            CancelPickupRequest::builder()
                .scheduled_date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
                .build(),
            Err(ConfigError::MissingRequiredField {
                field: "confirmation_number"
            })
        );
        assert_eq!(
            CancelPickupRequest::builder().confirmation_number("20").build(),
            Err(ConfigError::MissingRequiredField {
                field: "scheduled_date"
            })
        );
    }

    #[test]
    fn test_carrier_and_remarks_overrides() {
        let request = CancelPickupRequest::builder()
            .confirmation_number("20")
            .scheduled_date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
            .carrier_code("FDXE")
            .remarks("Customer request")
            .build()
            .unwrap();
        let xml = build_document(&credentials(), &CancelPickup(&request)).unwrap();
        assert!(xml.contains("<CarrierCode>FDXE</CarrierCode>"));
        assert!(xml.contains("<Remarks>Customer request</Remarks>"));
    }
}

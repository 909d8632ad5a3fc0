//! Address validation and residential classification.

use serde_json::Value;

use crate::config::Credentials;
use crate::error::ConfigError;
use crate::models::{Address, AddressValidationResult};
use crate::request::envelope::{add_timestamp, OperationSpec};
use crate::request::errors::{OperationFamily, ShipmentError};
use crate::request::fragments::write_address;
use crate::request::{required, Operation};
use crate::xml::{path, XmlError, XmlWriter};

const REPLY_KEY: &str = "address_validation_reply";

/// Which address validation schema to speak.
///
/// The two schemas coexist on the gateway. `V10` is the current one; `V2`
/// sends explicit matching options and a request timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressValidationVersion {
    V2,
    #[default]
    V10,
}

impl AddressValidationVersion {
    #[must_use]
    pub const fn major(self) -> u32 {
        match self {
            Self::V2 => 2,
            Self::V10 => 10,
        }
    }
}

/// Validates one recipient address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressValidationRequest {
    recipient: Address,
    version: AddressValidationVersion,
    address_id: String,
    debug: bool,
}

impl AddressValidationRequest {
    #[must_use]
    pub fn builder() -> AddressValidationRequestBuilder {
        AddressValidationRequestBuilder::default()
    }

    #[must_use]
    pub const fn recipient(&self) -> &Address {
        &self.recipient
    }

    #[must_use]
    pub const fn version(&self) -> AddressValidationVersion {
        self.version
    }
}

/// Builder for [`AddressValidationRequest`].
#[derive(Debug, Default)]
pub struct AddressValidationRequestBuilder {
    recipient: Option<Address>,
    version: AddressValidationVersion,
    address_id: Option<String>,
    debug: bool,
}

impl AddressValidationRequestBuilder {
    #[must_use]
    pub fn recipient(mut self, address: Address) -> Self {
        self.recipient = Some(address);
        self
    }

    #[must_use]
    pub const fn version(mut self, version: AddressValidationVersion) -> Self {
        self.version = version;
        self
    }

    /// Caller-side identifier echoed back by the `V2` schema.
    #[must_use]
    pub fn address_id(mut self, address_id: impl Into<String>) -> Self {
        self.address_id = Some(address_id.into());
        self
    }

    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] without a recipient.
    pub fn build(self) -> Result<AddressValidationRequest, ConfigError> {
        let recipient = self
            .recipient
            .ok_or(ConfigError::MissingRequiredField { field: "recipient" })?;
        Ok(AddressValidationRequest {
            recipient,
            version: self.version,
            address_id: self.address_id.unwrap_or_else(|| "recipient".to_string()),
            debug: self.debug,
        })
    }
}

#[derive(Debug)]
pub struct AddressValidation<'a>(pub &'a AddressValidationRequest);

impl AddressValidation<'_> {
    fn write_options(w: &mut XmlWriter) -> Result<(), XmlError> {
        w.element("Options", |w| {
            w.text("CheckResidentialStatus", true)?;
            w.text("MaximumNumberOfMatches", 5)?;
            w.text("StreetAccuracy", "LOOSE")?;
            w.text("DirectionalAccuracy", "LOOSE")?;
            w.text("CompanyNameAccuracy", "LOOSE")?;
            w.text("ConvertToUpperCase", true)?;
            w.text("RecognizeAlternateCityNames", true)?;
            w.text("ReturnParsedElements", true)
        })
    }
}

impl Operation for AddressValidation<'_> {
    type Output = AddressValidationResult;

    fn spec(&self) -> OperationSpec {
        OperationSpec {
            name: "address_validation",
            root: "AddressValidationRequest",
            namespace: "addressvalidation",
            service_id: "aval",
            major: self.0.version.major(),
            reply_key: REPLY_KEY,
            family: OperationFamily::AddressValidation,
        }
    }

    fn write_body(&self, w: &mut XmlWriter, _credentials: &Credentials) -> Result<(), XmlError> {
        let request = self.0;
        match request.version {
            AddressValidationVersion::V10 => w.element("AddressesToValidate", |w| {
                write_address(w, "Address", &request.recipient)
            }),
            AddressValidationVersion::V2 => {
                add_timestamp(w)?;
                Self::write_options(w)?;
                w.element("AddressesToValidate", |w| {
                    w.text("AddressId", &request.address_id)?;
                    write_address(w, "Address", &request.recipient)
                })
            }
        }
    }

    fn extract(&self, reply: &Value) -> Result<AddressValidationResult, ShipmentError> {
        let details = match self.0.version {
            AddressValidationVersion::V10 => path(
                reply,
                &[
                    "address_results",
                    "address_validation_result",
                    "proposed_address_details",
                ],
            )
            .filter(|v| !v.is_null())
            .map_or_else(
                || required(reply, REPLY_KEY, &["address_results", "proposed_address_details"]),
                Ok,
            )?,
            AddressValidationVersion::V2 => {
                required(reply, REPLY_KEY, &["address_results", "proposed_address_details"])?
            }
        };

        let text = |key: &str| path(details, &[key]).and_then(Value::as_str).map(str::to_string);
        Ok(AddressValidationResult {
            residential_status: text("residential_status"),
            score: text("score"),
            proposed_address: path(details, &["address"]).filter(|v| !v.is_null()).cloned(),
        })
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
    use serde_json::json;

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

    fn address() -> Address {
        Address {
            street_lines: vec!["7 Elm St".to_string()],
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            country_code: "US".to_string(),
            residential: None,
        }
    }

    #[test]
    fn test_build_requires_recipient() {
        assert_eq!(
            AddressValidationRequest::builder().build(),
            Err(ConfigError::MissingRequiredField { field: "recipient" })
        );
    }

    #[test]
    fn test_v10_document() {
        let request = AddressValidationRequest::builder()
            .recipient(address())
            .build()
            .unwrap();
        let xml = build_document(&credentials(), &AddressValidation(&request)).unwrap();

        assert!(xml.starts_with(
            r#"<AddressValidationRequest xmlns="http://fedex.com/ws/addressvalidation/v10">"#
        ));
        assert!(xml.contains("<ServiceId>aval</ServiceId><Major>10</Major>"));
        assert!(xml.contains("<AddressesToValidate><Address><StreetLines>7 Elm St</StreetLines>"));
        assert!(!xml.contains("RequestTimestamp"));
        assert!(!xml.contains("<Options>"));
    }

    #[test]
    fn test_v2_document() {
        let request = AddressValidationRequest::builder()
            .recipient(address())
            .version(AddressValidationVersion::V2)
            .address_id("home")
            .build()
            .unwrap();
        let xml = build_document(&credentials(), &AddressValidation(&request)).unwrap();

        assert!(xml.starts_with(
            r#"<AddressValidationRequest xmlns="http://fedex.com/ws/addressvalidation/v2">"#
        ));
        assert!(xml.contains("<Major>2</Major>"));
        assert!(xml.contains("</Version><RequestTimestamp>"));
        assert!(xml.contains("<Options><CheckResidentialStatus>true</CheckResidentialStatus>"));
        assert!(xml.contains("<MaximumNumberOfMatches>5</MaximumNumberOfMatches>"));
        assert!(xml.contains("<AddressesToValidate><AddressId>home</AddressId><Address>"));
    }

    #[test]
    fn test_v10_extract_reads_nested_result() {
        let request = AddressValidationRequest::builder()
            .recipient(address())
            .build()
            .unwrap();
        let reply = json!({
            "highest_severity": "SUCCESS",
            "address_results": [{
                "address_validation_result": {
                    "proposed_address_details": {
                        "score": "100",
                        "residential_status": "BUSINESS",
                        "address": { "city": "SPRINGFIELD" }
                    }
                }
            }]
        });

        let result = AddressValidation(&request).extract(&reply).unwrap();
        assert_eq!(result.residential_status.as_deref(), Some("BUSINESS"));
        assert_eq!(result.score.as_deref(), Some("100"));
        assert_eq!(result.proposed_address, Some(json!({ "city": "SPRINGFIELD" })));
        assert!(!result.is_residential());
    }

    #[test]
    fn test_v10_extract_falls_back_to_flat_details() {
        let request = AddressValidationRequest::builder()
            .recipient(address())
            .build()
            .unwrap();
        let reply = json!({
            "address_results": { "proposed_address_details": { "residential_status": "RESIDENTIAL" } }
        });
        let result = AddressValidation(&request).extract(&reply).unwrap();
        assert!(result.is_residential());
        assert!(result.proposed_address.is_none());
    }

    #[test]
    fn test_v2_extract_requires_details() {
        let request = AddressValidationRequest::builder()
            .recipient(address())
            .version(AddressValidationVersion::V2)
            .build()
            .unwrap();
        let error = AddressValidation(&request)
            .extract(&json!({ "address_results": {} }))
            .unwrap_err();
        assert!(matches!(
            error,
            ShipmentError::Parse(XmlError::MissingElement(ref p))
                if p == "address_validation_reply.address_results.proposed_address_details"
        ));
    }
}

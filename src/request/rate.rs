//! Rate quotes.

use serde_json::Value;

use crate::config::Credentials;
use crate::error::ConfigError;
use crate::models::FreightBillingPolicy;
use crate::request::envelope::OperationSpec;
use crate::request::errors::{OperationFamily, ShipmentError};
use crate::request::fragments::{
    write_bag_block, write_freight_shipment_detail, write_packages, write_party, write_recipient,
    write_shipping_charges_payment, FreightDetail,
};
use crate::request::shipment_request::ShipmentRequest;
use crate::request::{required, Operation};
use crate::xml::{XmlError, XmlWriter};

pub const SPEC: OperationSpec = OperationSpec {
    name: "rate",
    root: "RateRequest",
    namespace: "rate",
    service_id: "crs",
    major: 18,
    reply_key: "rate_reply",
    family: OperationFamily::Rate,
};

/// Quotes a shipment. Without a service type every available service is
/// quoted. With a freight billing party the shipment is quoted as freight.
#[derive(Debug)]
pub struct Rate<'a> {
    pub request: &'a ShipmentRequest,
    pub policy: &'a dyn FreightBillingPolicy,
}

impl Operation for Rate<'_> {
    type Output = Value;

    fn spec(&self) -> OperationSpec {
        SPEC
    }

    fn validate(&self, credentials: &Credentials) -> Result<(), ConfigError> {
        if self.request.freight_billing.is_some() && credentials.freight_account_number().is_none()
        {
            return Err(ConfigError::MissingRequiredField {
                field: "freight_account_number",
            });
        }
        Ok(())
    }

    fn write_body(&self, w: &mut XmlWriter, credentials: &Credentials) -> Result<(), XmlError> {
        let request = self.request;
        let options = &request.shipping_options;
        let service_type = request.resolved_service_type();

        w.text("ReturnTransitAndCommit", true)?;
        w.element("RequestedShipment", |w| {
            w.text("DropoffType", &options.drop_off_type)?;
            w.optional_text("ServiceType", service_type.as_ref())?;
            w.text("PackagingType", &options.packaging_type)?;
            write_party(w, "Shipper", &request.shipper)?;
            write_recipient(w, &request.recipient)?;
            write_shipping_charges_payment(w, credentials.account_number(), &request.shipper)?;
            if let Some(smart_post) = &request.smart_post_detail {
                write_bag_block(w, "SmartPostDetail", smart_post)?;
            }
            if let Some(services) = &request.special_services {
                write_bag_block(w, "SpecialServicesRequested", services)?;
            }
            if let Some(customs) = &request.customs_clearance {
                write_bag_block(w, "CustomsClearanceDetail", customs)?;
            }
            let freight = request
                .freight_billing
                .as_ref()
                .zip(credentials.freight_account_number());
            if let Some((billing, account_number)) = freight {
                let role = options
                    .role
                    .clone()
                    .unwrap_or_else(|| self.policy.role(&request.recipient));
                let payment_type = options
                    .payment
                    .clone()
                    .unwrap_or_else(|| self.policy.payment_type(&request.recipient));
                write_freight_shipment_detail(
                    w,
                    &FreightDetail {
                        account_number,
                        billing,
                        role: &role,
                        payment_type: &payment_type,
                        packages: &request.packages,
                        options,
                    },
                )?;
            }
            w.text("RateRequestTypes", "NONE")?;
            if request.edt_request {
                w.text("EdtRequestType", "ALL")?;
            }
            if request.freight_billing.is_none() {
                write_packages(
                    w,
                    &request.packages,
                    request.service_type.as_ref(),
                    request.multi_piece.as_ref(),
                )?;
            }
            Ok(())
        })
    }

    fn extract(&self, reply: &Value) -> Result<Value, ShipmentError> {
        Ok(required(reply, SPEC.reply_key, &["rate_reply_details"])?.clone())
    }

    fn debug(&self) -> bool {
        self.request.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountNumber, MeterNumber, Mode, Password, ServiceKey};
    use crate::models::{service_types, Address, Contact, NamedAccountBilling, Package, Party, Weight};
    use crate::request::build_document;

    fn credentials(freight: bool) -> Credentials {
        let builder = Credentials::builder()
            .key(ServiceKey::new("k").unwrap())
            .password(Password::new("p").unwrap())
            .account_number(AccountNumber::new("510087020").unwrap())
            .meter(MeterNumber::new("118546765").unwrap())
            .mode(Mode::Development);
        let builder = if freight {
            builder.freight_account_number(AccountNumber::new("630081440").unwrap())
        } else {
            builder
        };
        builder.build().unwrap()
    }

    fn party(company: &str, state: &str) -> Party {
        Party {
            contact: Contact {
                person_name: "Pat".to_string(),
                company_name: company.to_string(),
                phone_number: "555".to_string(),
                title: None,
            },
            address: Address {
                street_lines: vec!["1 Main St".to_string()],
                city: "City".to_string(),
                state: state.to_string(),
                postal_code: "10001".to_string(),
                country_code: "US".to_string(),
                residential: None,
            },
        }
    }

    fn request() -> crate::request::ShipmentRequestBuilder {
        ShipmentRequest::builder()
            .shipper(party("Shipper Co", "CA"))
            .recipient(party("Acme", "NY"))
            .package(Package::new(Weight::lb(10.0)))
    }

    #[test]
    fn test_rate_document_without_service_type() {
        let request = request().build().unwrap();
        let policy = NamedAccountBilling::default();
        let xml = build_document(&credentials(false), &Rate { request: &request, policy: &policy })
            .unwrap();

        assert!(xml.starts_with(r#"<RateRequest xmlns="http://fedex.com/ws/rate/v18">"#));
        assert!(xml.contains("<ServiceId>crs</ServiceId><Major>18</Major>"));
        assert!(xml.contains("<ReturnTransitAndCommit>true</ReturnTransitAndCommit>"));
        assert!(!xml.contains("<ServiceType>"));
        assert!(xml.contains("<RateRequestTypes>NONE</RateRequestTypes>"));
        assert!(xml.contains("<RequestedPackageLineItems>"));
        assert!(!xml.contains("EdtRequestType"));
    }

    #[test]
    fn test_rate_freight_replaces_packages_with_freight_detail() {
        let request = request()
            .service_type(service_types::FEDEX_FREIGHT_ECONOMY)
            .freight_billing(party("Billing Co", "TN"))
            .build()
            .unwrap();
        let policy = NamedAccountBilling::new("Acme");
        let xml = build_document(&credentials(true), &Rate { request: &request, policy: &policy })
            .unwrap();

        assert!(xml.contains("<FreightShipmentDetail>"));
        assert!(xml.contains("<Role>SHIPPER</Role><PaymentType>COLLECT</PaymentType>"));
        assert!(!xml.contains("<RequestedPackageLineItems>"));
    }

    #[test]
    fn test_rate_freight_requires_freight_account() {
        let request = request()
            .freight_billing(party("Billing Co", "TN"))
            .build()
            .unwrap();
        let policy = NamedAccountBilling::default();
        let result = build_document(&credentials(false), &Rate { request: &request, policy: &policy });

        assert!(matches!(
            result,
            Err(ShipmentError::Config(ConfigError::MissingRequiredField {
                field: "freight_account_number"
            }))
        ));
    }

    #[test]
    fn test_rate_option_overrides_beat_policy() {
        let request = request()
            .freight_billing(party("Billing Co", "TN"))
            .shipping_options(crate::models::ShippingOptions {
                role: Some("RECIPIENT".to_string()),
                payment: Some("PREPAID".to_string()),
                ..Default::default()
            })
            .edt_request(true)
            .build()
            .unwrap();
        let policy = NamedAccountBilling::new("Acme");
        let xml = build_document(&credentials(true), &Rate { request: &request, policy: &policy })
            .unwrap();

        assert!(xml.contains("<Role>RECIPIENT</Role><PaymentType>PREPAID</PaymentType>"));
        assert!(xml.contains("<EdtRequestType>ALL</EdtRequestType>"));
    }
}

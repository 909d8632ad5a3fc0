//! Shipping labels.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::Credentials;
use crate::error::ConfigError;
use crate::models::{FreightBillingPolicy, LabelImageType, LabelResult};
use crate::request::envelope::OperationSpec;
use crate::request::errors::{OperationFamily, ShipmentError};
use crate::request::fragments::{
    write_bag_block, write_freight_shipment_detail, write_packages, write_party, write_recipient,
    write_printed_label_origin, write_shipping_charges_payment, FreightDetail,
};
use crate::request::shipment_request::ShipmentRequest;
use crate::request::{required, required_str, Operation};
use crate::xml::{XmlError, XmlWriter};

pub const SPEC: OperationSpec = OperationSpec {
    name: "label",
    root: "ProcessShipmentRequest",
    namespace: "ship",
    service_id: "ship",
    major: 10,
    reply_key: "process_shipment_reply",
    family: OperationFamily::Label,
};

/// Formats a ship timestamp as UTC with centisecond precision.
pub(crate) fn ship_timestamp(at: &DateTime<Utc>) -> String {
    format!(
        "{}.{:02}Z",
        at.format("%Y-%m-%dT%H:%M:%S"),
        at.timestamp_subsec_millis() / 10
    )
}

/// Stock for the shipment label itself.
const fn label_stock(freight: bool, image: LabelImageType) -> &'static str {
    if freight {
        "PAPER_LETTER"
    } else if image.is_thermal_stock() {
        "STOCK_4X6"
    } else {
        "PAPER_8.5X11_TOP_HALF_LABEL"
    }
}

/// Stock for the freight address label document.
const fn address_label_stock(image: LabelImageType) -> &'static str {
    if image.is_thermal_stock() {
        "STOCK_4X6"
    } else {
        "PAPER_4X6"
    }
}

/// Creates a shipment and returns its label.
///
/// Freight services get a bill of lading plus an address label document;
/// everything else gets a single package label.
#[derive(Debug)]
pub struct Label<'a> {
    pub request: &'a ShipmentRequest,
    pub policy: &'a dyn FreightBillingPolicy,
}

impl Label<'_> {
    fn is_freight(&self) -> bool {
        self.request
            .resolved_service_type()
            .is_some_and(|service| service.is_freight())
    }
}

impl Operation for Label<'_> {
    type Output = LabelResult;

    fn spec(&self) -> OperationSpec {
        SPEC
    }

    fn validate(&self, credentials: &Credentials) -> Result<(), ConfigError> {
        if self.request.service_type.is_none() {
            return Err(ConfigError::MissingRequiredField {
                field: "service_type",
            });
        }
        if self.is_freight() {
            if self.request.freight_billing.is_none() {
                return Err(ConfigError::MissingRequiredField {
                    field: "freight_billing",
                });
            }
            if credentials.freight_account_number().is_none() {
                return Err(ConfigError::MissingRequiredField {
                    field: "freight_account_number",
                });
            }
        }
        Ok(())
    }

    fn write_body(&self, w: &mut XmlWriter, credentials: &Credentials) -> Result<(), XmlError> {
        let request = self.request;
        let options = &request.shipping_options;
        let service_type = request.resolved_service_type();
        let freight = self.is_freight();
        let label_type = request.label_type;

        w.element("RequestedShipment", |w| {
            w.text("ShipTimestamp", ship_timestamp(&Utc::now()))?;
            w.text("DropoffType", &options.drop_off_type)?;
            w.optional_text("ServiceType", service_type.as_ref())?;
            w.text("PackagingType", &options.packaging_type)?;
            write_party(w, "Shipper", &request.shipper)?;
            write_recipient(w, &request.recipient)?;
            write_shipping_charges_payment(w, credentials.account_number(), &request.shipper)?;
            if let Some(services) = &request.special_services {
                write_bag_block(w, "SpecialServicesRequested", services)?;
            }
            if let Some(customs) = &request.customs_clearance {
                write_bag_block(w, "CustomsClearanceDetail", customs)?;
            }
            let freight_billing = request
                .freight_billing
                .as_ref()
                .zip(credentials.freight_account_number())
                .filter(|_| freight);
            if let Some((billing, account_number)) = freight_billing {
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
            w.element("LabelSpecification", |w| {
                if freight {
                    w.text("LabelFormatType", "VICS_BILL_OF_LADING")?;
                    w.text("ImageType", LabelImageType::Pdf)?;
                } else {
                    w.text("LabelFormatType", "COMMON2D")?;
                    w.text("ImageType", label_type)?;
                }
                w.text("LabelStockType", label_stock(freight, label_type))?;
                if let Some(origin) = &request.printed_label_origin {
                    write_printed_label_origin(w, origin)?;
                }
                Ok(())
            })?;
            if freight {
                w.element("ShippingDocumentSpecification", |w| {
                    w.text("ShippingDocumentTypes", "FREIGHT_ADDRESS_LABEL")?;
                    w.element("FreightAddressLabelDetail", |w| {
                        w.element("Format", |w| {
                            w.text("ImageType", label_type)?;
                            w.text("StockType", address_label_stock(label_type))?;
                            w.text("ProvideInstructions", true)
                        })
                    })
                })?;
            }
            w.text("RateRequestTypes", "ACCOUNT")?;
            write_packages(
                w,
                &request.packages,
                request.service_type.as_ref(),
                request.multi_piece.as_ref(),
            )
        })
    }

    fn extract(&self, reply: &Value) -> Result<LabelResult, ShipmentError> {
        if self.is_freight() {
            let documents = required(
                reply,
                SPEC.reply_key,
                &["completed_shipment_detail", "shipment_documents"],
            )?;
            let document_image = |index: usize| -> Result<String, XmlError> {
                let document = match documents {
                    Value::Array(items) => items.get(index),
                    single if index == 0 => Some(single),
                    _ => None,
                };
                let key = format!("completed_shipment_detail.shipment_documents[{index}]");
                let document = document.ok_or_else(|| {
                    XmlError::MissingElement(format!("{}.{key}", SPEC.reply_key))
                })?;
                required_str(document, &format!("{}.{key}", SPEC.reply_key), &["parts", "image"])
                    .map(str::to_string)
            };

            Ok(LabelResult::Freight {
                encoded_image: document_image(0)?,
                encoded_bill_of_lading: document_image(1)?,
                tracking_number: required_str(
                    reply,
                    SPEC.reply_key,
                    &["completed_shipment_detail", "master_tracking_id", "tracking_number"],
                )?
                .to_string(),
            })
        } else {
            let details = required(
                reply,
                SPEC.reply_key,
                &["completed_shipment_detail", "completed_package_details"],
            )?;
            let scope = format!("{}.completed_shipment_detail.completed_package_details", SPEC.reply_key);

            Ok(LabelResult::Package {
                encoded_image: required_str(details, &scope, &["label", "parts", "image"])?
                    .to_string(),
                tracking_number: required_str(details, &scope, &["tracking_ids", "tracking_number"])?
                    .to_string(),
            })
        }
    }

    fn debug(&self) -> bool {
        self.request.debug
    }
}

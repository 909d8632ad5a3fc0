//! The shipment description shared by rate quotes and labels.

use crate::error::ConfigError;
use crate::models::{
    LabelImageType, MultiPieceShipment, Package, Party, ServiceType, ShippingOptions,
};
use crate::request::fragments::resolve_service_type;
use crate::xml::Bag;

/// A shipment to rate or label.
///
/// Built once per call with [`ShipmentRequest::builder`] and read-only
/// afterwards.
///
/// # Example
///
/// ```rust
/// use fedex_api::models::{service_types, Address, Contact, Package, Party, Weight};
/// use fedex_api::ShipmentRequest;
///
/// let party = |state: &str| Party {
///     contact: Contact {
///         person_name: "Pat Doe".to_string(),
///         phone_number: "555-0100".to_string(),
///         ..Default::default()
///     },
///     address: Address {
///         street_lines: vec!["1 Main St".to_string()],
///         city: "Anytown".to_string(),
///         state: state.to_string(),
///         postal_code: "00000".to_string(),
///         country_code: "US".to_string(),
///         residential: None,
///     },
/// };
///
/// let request = ShipmentRequest::builder()
///     .shipper(party("CA"))
///     .recipient(party("NY"))
///     .package(Package::new(Weight::lb(10.0)))
///     .service_type(service_types::FEDEX_GROUND)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.resolved_service_type().unwrap().as_str(), "FEDEX_GROUND");
/// ```
#[derive(Clone, Debug)]
pub struct ShipmentRequest {
    pub(crate) shipper: Party,
    pub(crate) recipient: Party,
    pub(crate) packages: Vec<Package>,
    pub(crate) service_type: Option<ServiceType>,
    pub(crate) shipping_options: ShippingOptions,
    pub(crate) customs_clearance: Option<Bag>,
    pub(crate) special_services: Option<Bag>,
    pub(crate) smart_post_detail: Option<Bag>,
    pub(crate) label_type: LabelImageType,
    pub(crate) printed_label_origin: Option<Party>,
    pub(crate) freight_billing: Option<Party>,
    pub(crate) multi_piece: Option<MultiPieceShipment>,
    pub(crate) edt_request: bool,
    pub(crate) debug: bool,
}

impl ShipmentRequest {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ShipmentRequestBuilder {
        ShipmentRequestBuilder::default()
    }

    #[must_use]
    pub const fn shipper(&self) -> &Party {
        &self.shipper
    }

    #[must_use]
    pub const fn recipient(&self) -> &Party {
        &self.recipient
    }

    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// The service type as requested by the caller.
    #[must_use]
    pub const fn service_type(&self) -> Option<&ServiceType> {
        self.service_type.as_ref()
    }

    #[must_use]
    pub const fn shipping_options(&self) -> &ShippingOptions {
        &self.shipping_options
    }

    #[must_use]
    pub const fn label_type(&self) -> LabelImageType {
        self.label_type
    }

    #[must_use]
    pub const fn freight_billing(&self) -> Option<&Party> {
        self.freight_billing.as_ref()
    }

    /// The service type that will be sent, after the Hawaii/Alaska and
    /// residential ground substitutions.
    #[must_use]
    pub fn resolved_service_type(&self) -> Option<ServiceType> {
        resolve_service_type(
            &self.shipper,
            &self.recipient,
            &self.packages,
            self.service_type.as_ref(),
        )
    }
}

/// Builder for [`ShipmentRequest`].
///
/// `shipper`, `recipient` and at least one package are required.
#[derive(Debug, Default)]
pub struct ShipmentRequestBuilder {
    shipper: Option<Party>,
    recipient: Option<Party>,
    packages: Vec<Package>,
    service_type: Option<ServiceType>,
    shipping_options: Option<ShippingOptions>,
    customs_clearance: Option<Bag>,
    special_services: Option<Bag>,
    smart_post_detail: Option<Bag>,
    label_type: Option<LabelImageType>,
    printed_label_origin: Option<Party>,
    freight_billing: Option<Party>,
    multi_piece: Option<MultiPieceShipment>,
    edt_request: bool,
    debug: bool,
}

impl ShipmentRequestBuilder {
    #[must_use]
    pub fn shipper(mut self, shipper: Party) -> Self {
        self.shipper = Some(shipper);
        self
    }

    #[must_use]
    pub fn recipient(mut self, recipient: Party) -> Self {
        self.recipient = Some(recipient);
        self
    }

    /// Appends one package.
    #[must_use]
    pub fn package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    /// Appends several packages, keeping their order.
    #[must_use]
    pub fn packages(mut self, packages: impl IntoIterator<Item = Package>) -> Self {
        self.packages.extend(packages);
        self
    }

    #[must_use]
    pub fn service_type(mut self, service_type: impl Into<ServiceType>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    #[must_use]
    pub fn shipping_options(mut self, options: ShippingOptions) -> Self {
        self.shipping_options = Some(options);
        self
    }

    /// Sets the free-form `CustomsClearanceDetail` contents.
    #[must_use]
    pub fn customs_clearance(mut self, customs: Bag) -> Self {
        self.customs_clearance = Some(customs);
        self
    }

    /// Sets the free-form `SpecialServicesRequested` contents.
    #[must_use]
    pub fn special_services(mut self, services: Bag) -> Self {
        self.special_services = Some(services);
        self
    }

    /// Sets the free-form `SmartPostDetail` contents.
    #[must_use]
    pub fn smart_post_detail(mut self, detail: Bag) -> Self {
        self.smart_post_detail = Some(detail);
        self
    }

    #[must_use]
    pub const fn label_type(mut self, label_type: LabelImageType) -> Self {
        self.label_type = Some(label_type);
        self
    }

    #[must_use]
    pub fn printed_label_origin(mut self, origin: Party) -> Self {
        self.printed_label_origin = Some(origin);
        self
    }

    /// Sets the freight billing contact and address. Rate requests with a
    /// billing party are quoted as freight.
    #[must_use]
    pub fn freight_billing(mut self, billing: Party) -> Self {
        self.freight_billing = Some(billing);
        self
    }

    #[must_use]
    pub fn multi_piece(mut self, multi_piece: MultiPieceShipment) -> Self {
        self.multi_piece = Some(multi_piece);
        self
    }

    /// Requests estimated duties and taxes with a rate quote.
    #[must_use]
    pub const fn edt_request(mut self, enabled: bool) -> Self {
        self.edt_request = enabled;
        self
    }

    /// Logs the raw carrier response at `info` for this request.
    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Builds the request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shipper`,
    /// `recipient` or `packages` is missing.
    pub fn build(self) -> Result<ShipmentRequest, ConfigError> {
        let shipper = self
            .shipper
            .ok_or(ConfigError::MissingRequiredField { field: "shipper" })?;
        let recipient = self
            .recipient
            .ok_or(ConfigError::MissingRequiredField { field: "recipient" })?;
        if self.packages.is_empty() {
            return Err(ConfigError::MissingRequiredField { field: "packages" });
        }

        Ok(ShipmentRequest {
            shipper,
            recipient,
            packages: self.packages,
            service_type: self.service_type,
            shipping_options: self.shipping_options.unwrap_or_default(),
            customs_clearance: self.customs_clearance,
            special_services: self.special_services,
            smart_post_detail: self.smart_post_detail,
            label_type: self.label_type.unwrap_or_default(),
            printed_label_origin: self.printed_label_origin,
            freight_billing: self.freight_billing,
            multi_piece: self.multi_piece,
            edt_request: self.edt_request,
            debug: self.debug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Weight};

    fn party() -> Party {
        Party {
            address: Address {
                country_code: "US".to_string(),
                state: "CA".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_build_requires_shipper_recipient_and_packages() {
        let missing_shipper = ShipmentRequest::builder()
            .recipient(party())
            .package(Package::new(Weight::lb(1.0)))
            .build();
        assert_eq!(
            missing_shipper.unwrap_err(),
            ConfigError::MissingRequiredField { field: "shipper" }
        );

        let missing_recipient = ShipmentRequest::builder()
            .shipper(party())
            .package(Package::new(Weight::lb(1.0)))
            .build();
        assert_eq!(
            missing_recipient.unwrap_err(),
            ConfigError::MissingRequiredField { field: "recipient" }
        );

        let missing_packages = ShipmentRequest::builder()
            .shipper(party())
            .recipient(party())
            .build();
        assert_eq!(
            missing_packages.unwrap_err(),
            ConfigError::MissingRequiredField { field: "packages" }
        );
    }

    #[test]
    fn test_defaults_are_applied_at_build() {
        let request = ShipmentRequest::builder()
            .shipper(party())
            .recipient(party())
            .packages(vec![Package::new(Weight::lb(1.0)), Package::new(Weight::lb(2.0))])
            .build()
            .unwrap();

        assert_eq!(request.packages().len(), 2);
        assert_eq!(request.shipping_options().drop_off_type, "REGULAR_PICKUP");
        assert_eq!(request.label_type(), LabelImageType::Pdf);
        assert!(request.service_type().is_none());
        assert!(request.resolved_service_type().is_none());
        assert!(!request.debug);
    }
}

//! Fixed-shape request fragments shared across operations.

use crate::config::AccountNumber;
use crate::models::{
    service_types, Address, Contact, MultiPieceShipment, Package, Party, ServiceType,
    ShippingOptions,
};
use crate::xml::{Bag, XmlError, XmlWriter};

/// Street lines beyond this count are dropped.
pub const MAX_STREET_LINES: usize = 2;

/// Residential ground shipments at or above this weight keep the requested
/// service.
pub const HOME_DELIVERY_WEIGHT_LIMIT: f64 = 70.0;

const NON_CONTIGUOUS_STATES: &[&str] = &["HI", "AK"];

pub fn write_contact(w: &mut XmlWriter, contact: &Contact) -> Result<(), XmlError> {
    w.element("Contact", |w| {
        w.text("PersonName", &contact.person_name)?;
        w.optional_text("Title", contact.title.as_deref())?;
        w.text("CompanyName", &contact.company_name)?;
        w.text("PhoneNumber", &contact.phone_number)
    })
}

/// Writes the children of an address element.
pub fn write_address_fields(w: &mut XmlWriter, address: &Address) -> Result<(), XmlError> {
    for line in address.street_lines.iter().take(MAX_STREET_LINES) {
        w.text("StreetLines", line)?;
    }
    w.text("City", &address.city)?;
    w.text("StateOrProvinceCode", &address.state)?;
    w.text("PostalCode", &address.postal_code)?;
    w.text("CountryCode", &address.country_code)
}

pub fn write_address(w: &mut XmlWriter, name: &str, address: &Address) -> Result<(), XmlError> {
    w.element(name, |w| write_address_fields(w, address))
}

/// Writes `<name><Contact/><Address/></name>`.
pub fn write_party(w: &mut XmlWriter, name: &str, party: &Party) -> Result<(), XmlError> {
    w.element(name, |w| {
        write_contact(w, &party.contact)?;
        write_address(w, "Address", &party.address)
    })
}

/// Writes `<Recipient>`. Only the recipient address carries `Residential`.
pub fn write_recipient(w: &mut XmlWriter, recipient: &Party) -> Result<(), XmlError> {
    w.element("Recipient", |w| {
        write_contact(w, &recipient.contact)?;
        w.element("Address", |w| {
            write_address_fields(w, &recipient.address)?;
            w.optional_text("Residential", recipient.address.residential)
        })
    })
}

/// Sender-paid shipping charges billed to the account.
pub fn write_shipping_charges_payment(
    w: &mut XmlWriter,
    account_number: &AccountNumber,
    shipper: &Party,
) -> Result<(), XmlError> {
    w.element("ShippingChargesPayment", |w| {
        w.text("PaymentType", "SENDER")?;
        w.element("Payor", |w| {
            w.text("AccountNumber", account_number.as_ref())?;
            w.text("CountryCode", &shipper.address.country_code)
        })
    })
}

/// Writes a free-form block: `<name>` followed by the rendered bag.
pub fn write_bag_block(w: &mut XmlWriter, name: &str, bag: &Bag) -> Result<(), XmlError> {
    w.element(name, |w| w.bag(bag))
}

fn write_weight(w: &mut XmlWriter, name: &str, package: &Package) -> Result<(), XmlError> {
    w.element(name, |w| {
        w.text("Units", package.weight.units)?;
        w.text("Value", package.weight.value)
    })
}

fn write_dimensions(w: &mut XmlWriter, package: &Package) -> Result<(), XmlError> {
    if let Some(d) = &package.dimensions {
        w.element("Dimensions", |w| {
            w.text("Length", d.length)?;
            w.text("Width", d.width)?;
            w.text("Height", d.height)?;
            w.text("Units", d.units)
        })?;
    }
    Ok(())
}

/// Returns the packages that go on the wire: only the first one for the
/// LTL freight services, every package otherwise.
#[must_use]
pub fn packages_for_service<'a>(
    packages: &'a [Package],
    service_type: Option<&ServiceType>,
) -> &'a [Package] {
    if service_type.is_some_and(ServiceType::is_freight_economy_or_priority) {
        &packages[..packages.len().min(1)]
    } else {
        packages
    }
}

/// Writes the package block: optional master tracking id, package count and
/// one `RequestedPackageLineItems` per package.
pub fn write_packages(
    w: &mut XmlWriter,
    packages: &[Package],
    service_type: Option<&ServiceType>,
    multi_piece: Option<&MultiPieceShipment>,
) -> Result<(), XmlError> {
    let ltl_freight = service_type.is_some_and(ServiceType::is_freight_economy_or_priority);

    if let Some(master) = multi_piece.and_then(|m| m.master_tracking_id.as_deref()) {
        w.element("MasterTrackingId", |w| w.text("TrackingNumber", master))?;
    }
    let package_count = multi_piece.and_then(|m| m.package_count).unwrap_or(1);
    w.text("PackageCount", package_count)?;

    for package in packages_for_service(packages, service_type) {
        w.element("RequestedPackageLineItems", |w| {
            w.optional_text("SequenceNumber", multi_piece.and_then(|m| m.sequence_number))?;
            w.text("GroupPackageCount", 1)?;
            if let Some(amount) = package.declared_value.filter(|_| !ltl_freight) {
                w.element("InsuredValue", |w| {
                    w.text("Currency", "USD")?;
                    w.text("Amount", amount)
                })?;
            }
            write_weight(w, "Weight", package)?;
            write_dimensions(w, package)?;
            if let Some(reference) = &package.reference {
                w.element("CustomerReferences", |w| {
                    w.text("CustomerReferenceType", "CUSTOMER_REFERENCE")?;
                    w.text("Value", reference)
                })?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

/// Inputs of a `FreightShipmentDetail` block.
#[derive(Debug)]
pub struct FreightDetail<'a> {
    pub account_number: &'a AccountNumber,
    pub billing: &'a Party,
    pub role: &'a str,
    pub payment_type: &'a str,
    pub packages: &'a [Package],
    pub options: &'a ShippingOptions,
}

/// Writes `FreightShipmentDetail`. Every package becomes a pallet line
/// item; the pallet weight is taken from the first package.
pub fn write_freight_shipment_detail(
    w: &mut XmlWriter,
    detail: &FreightDetail<'_>,
) -> Result<(), XmlError> {
    w.element("FreightShipmentDetail", |w| {
        w.text("FedExFreightAccountNumber", detail.account_number.as_ref())?;
        w.element("FedExFreightBillingContactAndAddress", |w| {
            write_contact(w, &detail.billing.contact)?;
            write_address(w, "Address", &detail.billing.address)
        })?;
        w.text("Role", detail.role)?;
        w.text("PaymentType", detail.payment_type)?;
        w.text("CollectTermsType", "STANDARD")?;
        w.text("TotalHandlingUnits", 1)?;
        w.text("ClientDiscountPercent", 0)?;
        if let Some(first) = detail.packages.first() {
            write_weight(w, "PalletWeight", first)?;
        }
        for package in detail.packages {
            w.element("LineItems", |w| {
                w.text("FreightClass", &detail.options.freight_class)?;
                w.text("ClassProvidedByCustomer", false)?;
                w.text("HandlingUnits", 1)?;
                w.text("Packaging", "PALLET")?;
                w.text("Pieces", package.pieces())?;
                w.optional_text("PurchaseOrderNumber", package.reference.as_deref())?;
                w.text(
                    "Description",
                    package
                        .description
                        .as_deref()
                        .unwrap_or(&detail.options.freight_description),
                )?;
                write_weight(w, "Weight", package)?;
                write_dimensions(w, package)
            })?;
        }
        Ok(())
    })
}

/// Writes `PrintedLabelOrigin`.
pub fn write_printed_label_origin(w: &mut XmlWriter, origin: &Party) -> Result<(), XmlError> {
    write_party(w, "PrintedLabelOrigin", origin)
}

/// Resolves the service type that is actually sent.
///
/// - shipments within the US to Hawaii or Alaska always go `FEDEX_2_DAY`
/// - residential ground shipments within the US whose first package weighs
///   under [`HOME_DELIVERY_WEIGHT_LIMIT`] go `GROUND_HOME_DELIVERY`
/// - anything else keeps the requested service, which may be none
#[must_use]
pub fn resolve_service_type(
    shipper: &Party,
    recipient: &Party,
    packages: &[Package],
    requested: Option<&ServiceType>,
) -> Option<ServiceType> {
    let domestic = shipper.address.is_us() && recipient.address.is_us();
    let state = recipient.address.state.trim();

    if domestic && NON_CONTIGUOUS_STATES.contains(&state) {
        return Some(ServiceType::new(service_types::FEDEX_2_DAY));
    }

    let requested = requested?;
    let light = packages
        .first()
        .is_some_and(|p| p.weight.value < HOME_DELIVERY_WEIGHT_LIMIT);
    if domestic && recipient.address.is_residential() && requested.is_ground_family() && light {
        return Some(ServiceType::new(service_types::GROUND_HOME_DELIVERY));
    }

    Some(requested.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weight;

    fn party(state: &str, country: &str, residential: Option<bool>) -> Party {
        Party {
            contact: Contact {
                person_name: "Pat Doe".to_string(),
                company_name: "Doe Co".to_string(),
                phone_number: "555-0100".to_string(),
                title: None,
            },
            address: Address {
                street_lines: vec!["1 Main St".to_string()],
                city: "Somewhere".to_string(),
                state: state.to_string(),
                postal_code: "00000".to_string(),
                country_code: country.to_string(),
                residential,
            },
        }
    }

    fn render<F>(body: F) -> String
    where
        F: FnOnce(&mut XmlWriter) -> Result<(), XmlError>,
    {
        XmlWriter::document("Root", None, body).unwrap()
    }

    fn lb(value: f64) -> Package {
        Package::new(Weight::lb(value))
    }

    #[test]
    fn test_address_truncates_to_two_street_lines() {
        let mut address = party("CA", "US", None).address;
        address.street_lines = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        let xml = render(|w| write_address(w, "Address", &address));

        assert_eq!(xml.matches("<StreetLines>").count(), 2);
        assert!(xml.contains("<StreetLines>a</StreetLines><StreetLines>b</StreetLines><City>"));
    }

    #[test]
    fn test_address_never_pads_street_lines() {
        let mut address = party("CA", "US", None).address;
        address.street_lines = vec![];
        assert_eq!(render(|w| write_address(w, "Address", &address)).matches("<StreetLines>").count(), 0);

        address.street_lines = vec!["only".into()];
        assert_eq!(render(|w| write_address(w, "Address", &address)).matches("<StreetLines>").count(), 1);
    }

    #[test]
    fn test_residential_flag_only_when_known() {
        let known = party("NY", "US", Some(true));
        assert!(render(|w| write_recipient(w, &known))
            .contains("<CountryCode>US</CountryCode><Residential>true</Residential></Address>"));

        let unknown = party("NY", "US", None);
        assert!(!render(|w| write_recipient(w, &unknown)).contains("Residential"));
    }

    #[test]
    fn test_residential_flag_only_on_recipient() {
        let residential = party("NY", "US", Some(true));
        assert!(!render(|w| write_party(w, "Shipper", &residential)).contains("Residential"));
        assert!(!render(|w| write_party(w, "PrintedLabelOrigin", &residential))
            .contains("Residential"));
        assert!(!render(|w| write_address(w, "PickupAddress", &residential.address))
            .contains("Residential"));
    }

    #[test]
    fn test_packages_for_ltl_freight_keep_only_first() {
        let packages = vec![lb(100.0), lb(200.0), lb(300.0)];
        let economy = ServiceType::new(service_types::FEDEX_FREIGHT_ECONOMY);
        let xml = render(|w| write_packages(w, &packages, Some(&economy), None));

        assert_eq!(xml.matches("<RequestedPackageLineItems>").count(), 1);
        assert!(xml.contains("<Value>100</Value>"));
        assert!(!xml.contains("<Value>200</Value>"));
    }

    #[test]
    fn test_packages_for_other_services_keep_all() {
        let packages = vec![lb(1.0), lb(2.0), lb(3.0)];
        let ground = ServiceType::new(service_types::FEDEX_GROUND);
        let xml = render(|w| write_packages(w, &packages, Some(&ground), None));

        assert_eq!(xml.matches("<RequestedPackageLineItems>").count(), 3);
        assert!(xml.contains("<PackageCount>1</PackageCount>"));
    }

    #[test]
    fn test_insured_value_skipped_for_ltl_freight() {
        let packages = vec![Package {
            declared_value: Some(250.0),
            ..lb(10.0)
        }];

        let ground = ServiceType::new(service_types::FEDEX_GROUND);
        let xml = render(|w| write_packages(w, &packages, Some(&ground), None));
        assert!(xml.contains("<InsuredValue><Currency>USD</Currency><Amount>250</Amount></InsuredValue>"));

        let priority = ServiceType::new(service_types::FEDEX_FREIGHT_PRIORITY);
        let xml = render(|w| write_packages(w, &packages, Some(&priority), None));
        assert!(!xml.contains("InsuredValue"));
    }

    #[test]
    fn test_multi_piece_details() {
        let mps = MultiPieceShipment {
            master_tracking_id: Some("794644790138".to_string()),
            package_count: Some(3),
            sequence_number: Some(2),
        };
        let xml = render(|w| write_packages(w, &[lb(5.0)], None, Some(&mps)));

        assert!(xml.starts_with(
            "<Root><MasterTrackingId><TrackingNumber>794644790138</TrackingNumber></MasterTrackingId>\
             <PackageCount>3</PackageCount><RequestedPackageLineItems><SequenceNumber>2</SequenceNumber>"
        ));
    }

    #[test]
    fn test_freight_detail_lists_every_package() {
        let billing = Party {
            contact: Contact {
                title: Some("Manager".to_string()),
                ..party("TN", "US", None).contact
            },
            ..party("TN", "US", None)
        };
        let packages = vec![
            Package {
                reference: Some("PO-1".to_string()),
                quantity: Some(4),
                ..lb(500.0)
            },
            lb(300.0),
        ];
        let account = AccountNumber::new("630081440").unwrap();
        let options = ShippingOptions::default();
        let detail = FreightDetail {
            account_number: &account,
            billing: &billing,
            role: "SHIPPER",
            payment_type: "COLLECT",
            packages: &packages,
            options: &options,
        };
        let xml = render(|w| write_freight_shipment_detail(w, &detail));

        assert!(xml.contains("<FedExFreightAccountNumber>630081440</FedExFreightAccountNumber>"));
        assert!(xml.contains("<PersonName>Pat Doe</PersonName><Title>Manager</Title>"));
        assert!(xml.contains("<Role>SHIPPER</Role><PaymentType>COLLECT</PaymentType>"));
        assert!(xml.contains("<PalletWeight><Units>LB</Units><Value>500</Value></PalletWeight>"));
        assert_eq!(xml.matches("<LineItems>").count(), 2);
        assert!(xml.contains("<Pieces>4</Pieces><PurchaseOrderNumber>PO-1</PurchaseOrderNumber>"));
        assert_eq!(xml.matches("<Description>Furniture</Description>").count(), 2);
        assert!(xml.contains("<FreightClass>CLASS_085</FreightClass>"));
    }

    #[test]
    fn test_non_contiguous_states_force_two_day() {
        let shipper = party("CA", "US", None);
        let packages = vec![lb(10.0)];
        for state in ["HI", "AK"] {
            let recipient = party(state, "US", Some(true));
            for requested in [
                Some(ServiceType::new(service_types::FEDEX_GROUND)),
                Some(ServiceType::new(service_types::PRIORITY_OVERNIGHT)),
                None,
            ] {
                assert_eq!(
                    resolve_service_type(&shipper, &recipient, &packages, requested.as_ref()),
                    Some(ServiceType::new(service_types::FEDEX_2_DAY))
                );
            }
        }
    }

    #[test]
    fn test_non_contiguous_override_needs_domestic_shipper() {
        let shipper = party("ON", "CA", None);
        let recipient = party("HI", "US", None);
        let ground = ServiceType::new(service_types::FEDEX_GROUND);
        assert_eq!(
            resolve_service_type(&shipper, &recipient, &[lb(1.0)], Some(&ground)),
            Some(ground)
        );
    }

    #[test]
    fn test_residential_ground_weight_threshold() {
        let shipper = party("CA", "US", None);
        let recipient = party("NY", "US", Some(true));
        let ground = ServiceType::new(service_types::FEDEX_GROUND);

        assert_eq!(
            resolve_service_type(&shipper, &recipient, &[lb(69.9)], Some(&ground)),
            Some(ServiceType::new(service_types::GROUND_HOME_DELIVERY))
        );
        assert_eq!(
            resolve_service_type(&shipper, &recipient, &[lb(70.0)], Some(&ground)),
            Some(ground.clone())
        );

        let business = party("NY", "US", None);
        assert_eq!(
            resolve_service_type(&shipper, &business, &[lb(10.0)], Some(&ground)),
            Some(ground)
        );
    }

    #[test]
    fn test_unrequested_service_stays_unset() {
        let shipper = party("CA", "US", None);
        let recipient = party("NY", "US", Some(true));
        assert_eq!(resolve_service_type(&shipper, &recipient, &[lb(1.0)], None), None);
    }
}

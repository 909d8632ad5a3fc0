//! Shipping options and freight billing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::party::Party;
use crate::models::service::{drop_off_types, packaging_types};

/// Default freight class for LTL line items.
pub const DEFAULT_FREIGHT_CLASS: &str = "CLASS_085";

/// Default freight line item description.
pub const DEFAULT_FREIGHT_DESCRIPTION: &str = "Furniture";

/// Per-shipment options. Every field has its default applied at
/// construction, including when deserialized from partial input.
///
/// # Example
///
/// ```rust
/// use fedex_api::models::ShippingOptions;
///
/// let options = ShippingOptions {
///     packaging_type: "FEDEX_BOX".to_string(),
///     ..Default::default()
/// };
///
/// assert_eq!(options.drop_off_type, "REGULAR_PICKUP");
/// assert_eq!(options.packaging_type, "FEDEX_BOX");
/// assert!(options.role.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShippingOptions {
    pub drop_off_type: String,
    pub packaging_type: String,

    /// Freight billing role; falls back to the [`FreightBillingPolicy`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Freight payment type; falls back to the [`FreightBillingPolicy`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,

    pub freight_class: String,
    pub freight_description: String,
}

impl Default for ShippingOptions {
    fn default() -> Self {
        Self {
            drop_off_type: drop_off_types::REGULAR_PICKUP.to_string(),
            packaging_type: packaging_types::YOUR_PACKAGING.to_string(),
            role: None,
            payment: None,
            freight_class: DEFAULT_FREIGHT_CLASS.to_string(),
            freight_description: DEFAULT_FREIGHT_DESCRIPTION.to_string(),
        }
    }
}

/// Decides the freight billing role and payment type when the caller did
/// not set them in [`ShippingOptions`].
pub trait FreightBillingPolicy: fmt::Debug + Send + Sync {
    /// Role for the given recipient, e.g. `SHIPPER` or `THIRD_PARTY`.
    fn role(&self, recipient: &Party) -> String;

    /// Payment type for the given recipient, e.g. `COLLECT` or `PREPAID`.
    fn payment_type(&self, recipient: &Party) -> String;
}

/// Treats one named account as shipper-billed collect and everyone else as
/// third-party prepaid.
///
/// With no company configured every recipient is third-party prepaid.
///
/// # Example
///
/// ```rust
/// use fedex_api::models::{Contact, FreightBillingPolicy, NamedAccountBilling, Party};
///
/// let policy = NamedAccountBilling::new("Acme Furniture");
/// let recipient = Party {
///     contact: Contact {
///         company_name: "Acme Furniture".to_string(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
///
/// assert_eq!(policy.role(&recipient), "SHIPPER");
/// assert_eq!(policy.payment_type(&recipient), "COLLECT");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedAccountBilling {
    company: Option<String>,
}

impl NamedAccountBilling {
    /// Creates a policy for the given account company name.
    #[must_use]
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
        }
    }

    /// Returns the configured company name.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    fn is_named_account(&self, recipient: &Party) -> bool {
        self.company
            .as_deref()
            .is_some_and(|company| company == recipient.company())
    }
}

impl FreightBillingPolicy for NamedAccountBilling {
    fn role(&self, recipient: &Party) -> String {
        if self.is_named_account(recipient) {
            "SHIPPER".to_string()
        } else {
            "THIRD_PARTY".to_string()
        }
    }

    fn payment_type(&self, recipient: &Party) -> String {
        if self.is_named_account(recipient) {
            "COLLECT".to_string()
        } else {
            "PREPAID".to_string()
        }
    }
}

/// Multi-piece shipment details for labels after the first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MultiPieceShipment {
    /// Tracking number of the first (master) package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_tracking_id: Option<String>,

    /// Total number of packages in the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_count: Option<u32>,

    /// Position of this package in the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::party::Contact;
    use serde_json::json;

    fn recipient(company: &str) -> Party {
        Party {
            contact: Contact {
                company_name: company.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_shipping_options_defaults_fill_missing_fields() {
        let options: ShippingOptions =
            serde_json::from_value(json!({ "role": "SHIPPER" })).unwrap();

        assert_eq!(options.drop_off_type, "REGULAR_PICKUP");
        assert_eq!(options.packaging_type, "YOUR_PACKAGING");
        assert_eq!(options.freight_class, "CLASS_085");
        assert_eq!(options.freight_description, "Furniture");
        assert_eq!(options.role.as_deref(), Some("SHIPPER"));
        assert_eq!(options.payment, None);
    }

    #[test]
    fn test_named_account_billing() {
        let policy = NamedAccountBilling::new("Acme");

        assert_eq!(policy.role(&recipient("Acme")), "SHIPPER");
        assert_eq!(policy.payment_type(&recipient("Acme")), "COLLECT");
        assert_eq!(policy.role(&recipient("Other Co")), "THIRD_PARTY");
        assert_eq!(policy.payment_type(&recipient("Other Co")), "PREPAID");
    }

    #[test]
    fn test_default_policy_never_matches() {
        let policy = NamedAccountBilling::default();
        assert_eq!(policy.company(), None);
        assert_eq!(policy.role(&recipient("")), "THIRD_PARTY");
        assert_eq!(policy.payment_type(&recipient("")), "PREPAID");
    }
}

//! Typed success payloads.

use base64::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Residential statuses the carrier reports for addresses that should be
/// treated as residential (including those it cannot classify).
pub const RESIDENTIAL_STATUSES: &[&str] = &[
    "UNDETERMINED",
    "RESIDENTIAL",
    "INSUFFICIENT_DATA",
    "UNAVAILABLE",
    "NOT_APPLICABLE_TO_COUNTRY",
];

/// A created shipment's label.
///
/// Small-package and freight shipments return different documents, so the
/// two shapes are kept as distinct variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabelResult {
    /// A small-package label.
    Package {
        /// Base64-encoded label image.
        encoded_image: String,
        tracking_number: String,
    },
    /// A freight shipment: address label plus bill of lading.
    Freight {
        /// Base64-encoded freight address label.
        encoded_image: String,
        /// Base64-encoded bill of lading.
        encoded_bill_of_lading: String,
        tracking_number: String,
    },
}

impl LabelResult {
    /// Returns the tracking number (master tracking number for freight).
    #[must_use]
    pub fn tracking_number(&self) -> &str {
        match self {
            Self::Package {
                tracking_number, ..
            }
            | Self::Freight {
                tracking_number, ..
            } => tracking_number,
        }
    }

    /// Returns the base64-encoded label image.
    #[must_use]
    pub fn encoded_image(&self) -> &str {
        match self {
            Self::Package { encoded_image, .. } | Self::Freight { encoded_image, .. } => {
                encoded_image
            }
        }
    }

    /// Decodes the label image.
    ///
    /// # Errors
    ///
    /// Returns [`base64::DecodeError`] if the carrier sent invalid base64.
    pub fn decode_image(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64_STANDARD.decode(self.encoded_image())
    }

    /// Decodes the bill of lading. Returns `None` for small-package labels.
    ///
    /// # Errors
    ///
    /// Returns [`base64::DecodeError`] if the carrier sent invalid base64.
    pub fn decode_bill_of_lading(&self) -> Result<Option<Vec<u8>>, base64::DecodeError> {
        match self {
            Self::Package { .. } => Ok(None),
            Self::Freight {
                encoded_bill_of_lading,
                ..
            } => BASE64_STANDARD.decode(encoded_bill_of_lading).map(Some),
        }
    }

    /// Returns `true` for freight results.
    #[must_use]
    pub const fn is_freight(&self) -> bool {
        matches!(self, Self::Freight { .. })
    }
}

/// The outcome of an address validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AddressValidationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,

    /// The carrier's proposed address, as returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_address: Option<Value>,
}

impl AddressValidationResult {
    /// Returns `true` if the status is one of [`RESIDENTIAL_STATUSES`].
    /// A missing status is not residential.
    #[must_use]
    pub fn is_residential(&self) -> bool {
        self.residential_status
            .as_deref()
            .is_some_and(|status| RESIDENTIAL_STATUSES.contains(&status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_label_accessors() {
        let label = LabelResult::Package {
            encoded_image: BASE64_STANDARD.encode(b"%PDF-1.4"),
            tracking_number: "794644790138".to_string(),
        };

        assert_eq!(label.tracking_number(), "794644790138");
        assert_eq!(label.decode_image().unwrap(), b"%PDF-1.4");
        assert_eq!(label.decode_bill_of_lading().unwrap(), None);
        assert!(!label.is_freight());
    }

    #[test]
    fn test_freight_label_decodes_both_documents() {
        let label = LabelResult::Freight {
            encoded_image: BASE64_STANDARD.encode(b"label"),
            encoded_bill_of_lading: BASE64_STANDARD.encode(b"bol"),
            tracking_number: "1234".to_string(),
        };

        assert!(label.is_freight());
        assert_eq!(label.decode_image().unwrap(), b"label");
        assert_eq!(label.decode_bill_of_lading().unwrap(), Some(b"bol".to_vec()));
    }

    #[test]
    fn test_invalid_base64_is_an_error() {
        let label = LabelResult::Package {
            encoded_image: "not base64!".to_string(),
            tracking_number: "1".to_string(),
        };
        assert!(label.decode_image().is_err());
    }

    #[test]
    fn test_residential_classification() {
        for status in RESIDENTIAL_STATUSES {
            let result = AddressValidationResult {
                residential_status: Some((*status).to_string()),
                ..Default::default()
            };
            assert!(result.is_residential(), "{status}");
        }

        let business = AddressValidationResult {
            residential_status: Some("BUSINESS".to_string()),
            ..Default::default()
        };
        assert!(!business.is_residential());
        assert!(!AddressValidationResult::default().is_residential());
    }
}

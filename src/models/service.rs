//! Service, packaging and drop-off codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Known carrier service type codes.
pub mod service_types {
    pub const EUROPE_FIRST_INTERNATIONAL_PRIORITY: &str = "EUROPE_FIRST_INTERNATIONAL_PRIORITY";
    pub const FEDEX_1_DAY_FREIGHT: &str = "FEDEX_1_DAY_FREIGHT";
    pub const FEDEX_2_DAY: &str = "FEDEX_2_DAY";
    pub const FEDEX_2_DAY_AM: &str = "FEDEX_2_DAY_AM";
    pub const FEDEX_2_DAY_FREIGHT: &str = "FEDEX_2_DAY_FREIGHT";
    pub const FEDEX_3_DAY_FREIGHT: &str = "FEDEX_3_DAY_FREIGHT";
    pub const FEDEX_EXPRESS_SAVER: &str = "FEDEX_EXPRESS_SAVER";
    pub const FEDEX_FIRST_FREIGHT: &str = "FEDEX_FIRST_FREIGHT";
    pub const FEDEX_FREIGHT_ECONOMY: &str = "FEDEX_FREIGHT_ECONOMY";
    pub const FEDEX_FREIGHT_PRIORITY: &str = "FEDEX_FREIGHT_PRIORITY";
    pub const FEDEX_GROUND: &str = "FEDEX_GROUND";
    pub const FIRST_OVERNIGHT: &str = "FIRST_OVERNIGHT";
    pub const GROUND_HOME_DELIVERY: &str = "GROUND_HOME_DELIVERY";
    pub const INTERNATIONAL_ECONOMY: &str = "INTERNATIONAL_ECONOMY";
    pub const INTERNATIONAL_ECONOMY_FREIGHT: &str = "INTERNATIONAL_ECONOMY_FREIGHT";
    pub const INTERNATIONAL_FIRST: &str = "INTERNATIONAL_FIRST";
    pub const INTERNATIONAL_PRIORITY: &str = "INTERNATIONAL_PRIORITY";
    pub const INTERNATIONAL_PRIORITY_FREIGHT: &str = "INTERNATIONAL_PRIORITY_FREIGHT";
    pub const PRIORITY_OVERNIGHT: &str = "PRIORITY_OVERNIGHT";
    pub const SMART_POST: &str = "SMART_POST";
    pub const STANDARD_OVERNIGHT: &str = "STANDARD_OVERNIGHT";
}

/// Known packaging type codes.
pub mod packaging_types {
    pub const FEDEX_10KG_BOX: &str = "FEDEX_10KG_BOX";
    pub const FEDEX_25KG_BOX: &str = "FEDEX_25KG_BOX";
    pub const FEDEX_BOX: &str = "FEDEX_BOX";
    pub const FEDEX_ENVELOPE: &str = "FEDEX_ENVELOPE";
    pub const FEDEX_PAK: &str = "FEDEX_PAK";
    pub const FEDEX_TUBE: &str = "FEDEX_TUBE";
    pub const YOUR_PACKAGING: &str = "YOUR_PACKAGING";
}

/// Known drop-off type codes.
pub mod drop_off_types {
    pub const BUSINESS_SERVICE_CENTER: &str = "BUSINESS_SERVICE_CENTER";
    pub const DROP_BOX: &str = "DROP_BOX";
    pub const REGULAR_PICKUP: &str = "REGULAR_PICKUP";
    pub const REQUEST_COURIER: &str = "REQUEST_COURIER";
    pub const STATION: &str = "STATION";
}

/// A carrier service type code such as `FEDEX_GROUND`.
///
/// Any code is accepted; the carrier is the authority on which codes are
/// valid for a given shipment.
///
/// # Example
///
/// ```rust
/// use fedex_api::models::{service_types, ServiceType};
///
/// let ground = ServiceType::new(service_types::FEDEX_GROUND);
/// assert!(ground.is_ground_family());
/// assert!(!ground.is_freight());
///
/// let freight = ServiceType::new(service_types::FEDEX_FREIGHT_ECONOMY);
/// assert!(freight.is_freight());
/// assert!(freight.is_freight_economy_or_priority());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceType(String);

impl ServiceType {
    /// Wraps a service type code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for any freight service (code contains `FREIGHT`).
    #[must_use]
    pub fn is_freight(&self) -> bool {
        self.0.contains("FREIGHT")
    }

    /// Returns `true` for the two LTL freight services, which ship as a
    /// single aggregate line and are billed through freight detail.
    #[must_use]
    pub fn is_freight_economy_or_priority(&self) -> bool {
        matches!(
            self.0.as_str(),
            service_types::FEDEX_FREIGHT_ECONOMY | service_types::FEDEX_FREIGHT_PRIORITY
        )
    }

    /// Returns `true` if the code names a ground service (any case).
    #[must_use]
    pub fn is_ground_family(&self) -> bool {
        self.0.to_ascii_uppercase().contains("GROUND")
    }
}

impl AsRef<str> for ServiceType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceType {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ServiceType {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Label image formats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LabelImageType {
    #[default]
    Pdf,
    Png,
    Epl2,
    Zplii,
    Dpl,
}

impl LabelImageType {
    /// Returns `true` for thermal printer formats printed on 4x6 stock.
    #[must_use]
    pub const fn is_thermal_stock(self) -> bool {
        matches!(self, Self::Epl2)
    }
}

impl fmt::Display for LabelImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Pdf => "PDF",
            Self::Png => "PNG",
            Self::Epl2 => "EPL2",
            Self::Zplii => "ZPLII",
            Self::Dpl => "DPL",
        };
        f.write_str(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freight_classification() {
        assert!(ServiceType::new("FEDEX_1_DAY_FREIGHT").is_freight());
        assert!(!ServiceType::new("FEDEX_1_DAY_FREIGHT").is_freight_economy_or_priority());
        assert!(ServiceType::new("FEDEX_FREIGHT_PRIORITY").is_freight_economy_or_priority());
        assert!(!ServiceType::new("PRIORITY_OVERNIGHT").is_freight());
    }

    #[test]
    fn test_ground_family_is_case_insensitive() {
        assert!(ServiceType::new("FEDEX_GROUND").is_ground_family());
        assert!(ServiceType::new("fedex_ground").is_ground_family());
        assert!(ServiceType::new("GROUND_HOME_DELIVERY").is_ground_family());
        assert!(!ServiceType::new("FEDEX_2_DAY").is_ground_family());
    }

    #[test]
    fn test_label_image_type_codes() {
        assert_eq!(LabelImageType::default().to_string(), "PDF");
        assert_eq!(LabelImageType::Zplii.to_string(), "ZPLII");
        assert_eq!(
            serde_json::from_str::<LabelImageType>("\"EPL2\"").unwrap(),
            LabelImageType::Epl2
        );
        assert!(LabelImageType::Epl2.is_thermal_stock());
        assert!(!LabelImageType::Png.is_thermal_stock());
    }
}
